use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::queries::{GenesForSymbolsRequest, GenesFromProtRequest};
use crate::error::AppResult;
use crate::features::FeatureState;

pub fn genes_routes() -> Router<FeatureState> {
    Router::new()
        .route("/genesForSymbols", post(genes_for_symbols))
        .route("/genesFromProt", post(genes_from_prot))
}

#[tracing::instrument(skip(state, payload))]
async fn genes_for_symbols(
    State(state): State<FeatureState>,
    payload: Result<Json<GenesForSymbolsRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let response = super::queries::genes_for_symbols::handle(&state, request).await?;

    tracing::debug!(failures = response.failures, "Gene symbol lookup completed");

    Ok(response.into_response())
}

#[tracing::instrument(skip(state, payload))]
async fn genes_from_prot(
    State(state): State<FeatureState>,
    payload: Result<Json<GenesFromProtRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let response = super::queries::genes_from_prot::handle(&state, request).await?;

    tracing::debug!(failures = response.failures, "Encoded-protein gene lookup completed");

    Ok(response.into_response())
}
