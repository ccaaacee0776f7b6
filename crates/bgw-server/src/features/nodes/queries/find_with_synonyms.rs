//! Nodes whose preferred label or synonyms match, optionally within taxa

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::features::shared::{normalize_taxa, require_list, resolve_type};
use crate::features::FeatureState;
use crate::projector::{Projection, ReturnType};
use crate::query;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymRequest {
    pub values: Option<Vec<String>>,
    pub node_type: Option<String>,
    /// NCBI taxon identifiers; empty or absent means any taxon
    pub taxa: Option<Vec<String>>,
    pub return_type: Option<String>,
}

#[tracing::instrument(skip(state, request), fields(node_type = ?request.node_type, taxa = ?request.taxa))]
pub async fn handle(state: &FeatureState, request: SynonymRequest) -> AppResult<Projection> {
    let values = require_list(request.values.as_deref(), "Values")?;
    let collection = resolve_type(request.node_type.as_deref())?;
    let taxa = normalize_taxa(request.taxa.as_deref());

    let docs = query::synonym_batch(collection, values, taxa)
        .fetch_all(state.store.as_ref())
        .await?;

    tracing::debug!(collection = %collection, count = docs.len(), "Synonym search completed");
    Ok(Projection::documents(
        docs,
        ReturnType::from_param(request.return_type.as_deref()),
    ))
}
