//! Genes by symbol, one match list per symbol

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
pub struct GenesForSymbolsRequest {
    /// Gene symbols, matched against the gene's preferred label
    pub terms: Option<Vec<String>>,
    pub return_type: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn handle(state: &FeatureState, request: GenesForSymbolsRequest) -> AppResult<BatchResponse> {
    let symbols = require_list(request.terms.as_deref(), "Search terms")?;
    let return_type = ReturnType::from_param(request.return_type.as_deref());

    let lookups = batch::fetch_matches(
        state.store.as_ref(),
        symbols,
        state.fetch_timeout,
        query::genes_by_symbol,
    )
    .await;

    Ok(BatchResponse::from_lookups(lookups, |groups| {
        Projection::gene_groups(groups, return_type)
    }))
}
