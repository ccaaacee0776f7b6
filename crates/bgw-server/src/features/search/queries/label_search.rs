//! Case-insensitive substring search on preferred labels

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

    let docs = query::label_substring(collection, term, limit)?
        .fetch_all(state.store.as_ref())
        .await?;

    tracing::debug!(collection = %collection, count = docs.len(), "Label search completed");
    Ok(docs)
}
