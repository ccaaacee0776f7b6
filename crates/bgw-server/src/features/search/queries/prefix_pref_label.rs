use super::TermSearchQuery;
use crate::error::AppResult;
use crate::features::shared::{require_param, resolve_type};
use crate::features::FeatureState;
use crate::query;
use bgw_common::Document;

#[tracing::instrument(skip(state))]
pub async fn handle(state: &FeatureState, query: TermSearchQuery) -> AppResult<Vec<Document>> {
    let term = require_param(query.term.as_deref(), "Term")?;
    let collection = resolve_type(query.node_type.as_deref())?;
    let limit = state.limits.resolve(query.limit.as_deref())?;

    let docs = query::prefix_pref_label(collection, term, limit)?
        .fetch_all(state.store.as_ref())
        .await?;

    tracing::debug!(collection = %collection, count = docs.len(), "Prefix search completed");
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{test_state, BRCA1_HUMAN};

    fn query(term: &str, limit: Option<&str>) -> TermSearchQuery {
        TermSearchQuery {
            term: Some(term.to_string()),
            node_type: Some("protein".to_string()),
            limit: limit.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_prefix_is_anchored() {
        let docs = handle(&test_state(), query("BRCA", None)).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_id"], BRCA1_HUMAN);
    }

    #[tokio::test]
    async fn test_prefix_is_case_sensitive() {
        let docs = handle(&test_state(), query("brca", None)).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_limit_caps_results() {
        let docs = handle(&test_state(), query("P53", Some("1"))).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["prefLabel"], "P53_HUMAN");
    }

    #[tokio::test]
    async fn test_validation_order() {
        let state = test_state();

        let err = handle(&state, TermSearchQuery::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Term not provided!");

        let err = handle(&state, TermSearchQuery { node_type: None, ..query("BRCA", None) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Type not provided!");

        let err = handle(&state, query("BRCA", Some("-3"))).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
