//! Genes encoding each of a list of proteins

use serde::{Deserialize, Serialize};

use crate::api::response::BatchResponse;
use crate::batch;
use crate::error::AppResult;
use crate::features::shared::require_list;
use crate::features::FeatureState;
use crate::projector::{Projection, ReturnType};
use crate::query;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesFromProtRequest {
    /// Protein URIs, matched against the gene's `encodes` reference
    pub uris: Option<Vec<String>>,
    pub return_type: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn handle(state: &FeatureState, request: GenesFromProtRequest) -> AppResult<BatchResponse> {
    let uris = require_list(request.uris.as_deref(), "Protein URIs")?;
    let return_type = ReturnType::from_param(request.return_type.as_deref());

    let lookups = batch::fetch_matches(
        state.store.as_ref(),
        uris,
        state.fetch_timeout,
        query::genes_by_encoded_protein,
    )
    .await;

    Ok(BatchResponse::from_lookups(lookups, |groups| {
        Projection::gene_groups(groups, return_type)
    }))
}
