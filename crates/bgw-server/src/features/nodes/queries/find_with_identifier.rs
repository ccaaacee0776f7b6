//! Nodes carrying any of a set of cross-reference identifiers

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::features::shared::{require_list, resolve_type};
use crate::features::FeatureState;
use crate::projector::{Projection, ReturnType};
use crate::query;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierRequest {
    pub values: Option<Vec<String>>,
    pub node_type: Option<String>,
    pub return_type: Option<String>,
}

#[tracing::instrument(skip(state, request), fields(node_type = ?request.node_type))]
pub async fn handle(state: &FeatureState, request: IdentifierRequest) -> AppResult<Projection> {
    let values = require_list(request.values.as_deref(), "Values")?;
    let collection = resolve_type(request.node_type.as_deref())?;

    let docs = query::identifier_batch(collection, values)
        .fetch_all(state.store.as_ref())
        .await?;

    tracing::debug!(collection = %collection, count = docs.len(), "Identifier search completed");
    Ok(Projection::documents(
        docs,
        ReturnType::from_param(request.return_type.as_deref()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{test_state, BRCA1_HUMAN, TP53_HUMAN};

    fn request(values: &[&str]) -> IdentifierRequest {
        IdentifierRequest {
            values: Some(values.iter().map(|s| s.to_string()).collect()),
            node_type: Some("protein".to_string()),
            return_type: None,
        }
    }

    #[tokio::test]
    async fn test_matches_any_identifier_in_natural_order() {
        let projection = handle(&test_state(), request(&["P38398", "ENSP00000269305"])).await.unwrap();
        let Projection::Json(body) = projection else {
            panic!("expected JSON");
        };
        let ids: Vec<_> = body.as_array().unwrap().iter().map(|d| d["_id"].clone()).collect();
        assert_eq!(ids, vec![TP53_HUMAN, BRCA1_HUMAN]);
    }

    #[tokio::test]
    async fn test_tsv_output() {
        let mut request = request(&["P38398"]);
        request.return_type = Some("tsv".to_string());

        let Projection::Tsv(tsv) = handle(&test_state(), request).await.unwrap() else {
            panic!("expected TSV");
        };
        assert_eq!(tsv.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_requires_values_and_type() {
        let err = handle(&test_state(), IdentifierRequest::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Values not provided!");

        let mut missing_type = request(&["P38398"]);
        missing_type.node_type = None;
        let err = handle(&test_state(), missing_type).await.unwrap_err();
        assert_eq!(err.to_string(), "Type not provided!");
    }
}
