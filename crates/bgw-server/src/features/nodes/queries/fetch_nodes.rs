//! Batch fetch of nodes by URI
//!
//! Each URI is routed to its own collection, so one batch may mix proteins,
//! genes, ontology terms and edges. The response keeps one entry per URI.

use serde::{Deserialize, Serialize};

use crate::api::response::BatchResponse;
use crate::batch;
use crate::error::{AppError, AppResult};
use crate::features::FeatureState;
use crate::projector::{Projection, ReturnType};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNodesRequest {
    pub uris: Option<Vec<String>>,
    /// Accepted in place of `uris`
    pub terms: Option<Vec<String>>,
    /// Ignored; collections are derived from each URI
    pub node_type: Option<String>,
    pub return_type: Option<String>,
    #[serde(default)]
    pub extra_fields: Vec<String>,
}

impl FetchNodesRequest {
    pub fn validate(&self) -> AppResult<&[String]> {
        self.uris
            .as_deref()
            .or(self.terms.as_deref())
            .ok_or_else(|| AppError::missing("URIs or terms"))
    }
}

#[tracing::instrument(skip(state, request), fields(count))]
pub async fn handle(state: &FeatureState, request: FetchNodesRequest) -> AppResult<BatchResponse> {
    let uris = request.validate()?;
    tracing::Span::current().record("count", uris.len());

    let return_type = ReturnType::from_param(request.return_type.as_deref());
    let lookups = batch::fetch_nodes_by_uri(state.store.as_ref(), uris, state.fetch_timeout).await;

    Ok(BatchResponse::from_lookups(lookups, |nodes| {
        Projection::nodes(nodes, return_type, &request.extra_fields)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{test_state, APOPTOSIS, BRCA1_HUMAN, TP53_HUMAN};
    use serde_json::json;

    fn request(uris: &[&str]) -> FetchNodesRequest {
        FetchNodesRequest {
            uris: Some(uris.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_results_align_with_input() {
        let response = handle(
            &test_state(),
            request(&[TP53_HUMAN, "http://rdf.biogateway.eu/prot/MISSING", APOPTOSIS]),
        )
        .await
        .unwrap();

        let Projection::Json(body) = response.body else {
            panic!("expected JSON");
        };
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["_id"], TP53_HUMAN);
        assert_eq!(body[1], json!(null));
        assert_eq!(body[2]["_id"], APOPTOSIS);
        assert_eq!(response.failures, 0);
    }

    #[tokio::test]
    async fn test_terms_accepted_in_place_of_uris() {
        let request = FetchNodesRequest {
            terms: Some(vec![BRCA1_HUMAN.to_string()]),
            ..Default::default()
        };
        let response = handle(&test_state(), request).await.unwrap();
        assert!(matches!(response.body, Projection::Json(ref body) if body[0]["_id"] == BRCA1_HUMAN));
    }

    #[tokio::test]
    async fn test_tsv_with_extra_fields() {
        let mut request = request(&[TP53_HUMAN, "http://rdf.biogateway.eu/prot/MISSING", BRCA1_HUMAN]);
        request.return_type = Some("tsv".to_string());
        request.extra_fields = vec!["taxon".to_string()];

        let response = handle(&test_state(), request).await.unwrap();
        let Projection::Tsv(tsv) = response.body else {
            panic!("expected TSV");
        };
        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "uri\tprefLabel\tdescription\ttaxon");
        assert!(lines[1].starts_with(TP53_HUMAN));
        assert!(lines[1].ends_with("\t9606"));
        assert!(lines[2].starts_with(BRCA1_HUMAN));
    }

    #[tokio::test]
    async fn test_missing_keys() {
        let err = handle(&test_state(), FetchNodesRequest::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "URIs or terms not provided!");
    }
}
