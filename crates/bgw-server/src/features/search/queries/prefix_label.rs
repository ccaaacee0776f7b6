//! Case-insensitive prefix search over labels and synonyms
//!
//! The GET form takes `term`, `type` and `limit` from the query string. The
//! POST form adds an optional taxon constraint.

use serde::{Deserialize, Serialize};

use super::TermSearchQuery;
use crate::catalog::Collection;
use crate::error::AppResult;
use crate::features::shared::{normalize_taxa, require_param, resolve_type};
use crate::features::FeatureState;
use crate::query;
use bgw_common::Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefixLabelRequest {
    pub term: Option<String>,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    /// NCBI taxon identifiers; empty or absent means any taxon
    pub taxa: Option<Vec<String>>,
    pub limit: Option<u32>,
}

#[tracing::instrument(skip(state, request), fields(term = ?request.term, node_type = ?request.node_type))]
pub async fn handle(state: &FeatureState, request: PrefixLabelRequest) -> AppResult<Vec<Document>> {
    let term = require_param(request.term.as_deref(), "Term")?;
    let collection = resolve_type(request.node_type.as_deref())?;
    let limit = state
        .limits
        .resolve(request.limit.map(|l| l.to_string()).as_deref())?;

    search(state, term, collection, normalize_taxa(request.taxa.as_deref()), limit).await
}

/// GET form; a limit that is not a number is rejected rather than ignored
#[tracing::instrument(skip(state, query), fields(term = ?query.term, node_type = ?query.node_type))]
pub async fn handle_query(state: &FeatureState, query: TermSearchQuery) -> AppResult<Vec<Document>> {
    let term = require_param(query.term.as_deref(), "Term")?;
    let collection = resolve_type(query.node_type.as_deref())?;
    let limit = state.limits.resolve(query.limit.as_deref())?;

    search(state, term, collection, None, limit).await
}

async fn search(
    state: &FeatureState,
    term: &str,
    collection: Collection,
    taxa: Option<&[String]>,
    limit: usize,
) -> AppResult<Vec<Document>> {
    let docs = query::prefix_label(collection, term, taxa, limit)?
        .fetch_all(state.store.as_ref())
        .await?;

    tracing::debug!(collection = %collection, count = docs.len(), "Prefix label search completed");
    Ok(docs)
}
