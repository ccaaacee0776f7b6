use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::queries::GenexMetadataQuery;
use crate::error::AppResult;
use crate::features::FeatureState;

/// Both paths are served by the same lookup; the second is kept for older clients
pub fn metadata_routes() -> Router<FeatureState> {
    Router::new()
        .route("/getGenexMetadata", get(genex_metadata))
        .route("/getGenexMetadataFromIDs", get(genex_metadata))
}

#[tracing::instrument(skip(state, params))]
async fn genex_metadata(
    State(state): State<FeatureState>,
    params: Result<Query<GenexMetadataQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let docs = super::queries::genex_metadata::handle(&state, query).await?;
    Ok(Json(docs).into_response())
}
