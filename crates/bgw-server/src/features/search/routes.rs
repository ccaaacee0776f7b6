use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::queries::{DownloadLabelsQuery, PrefixLabelRequest, TermSearchQuery};
use crate::error::AppResult;
use crate::features::FeatureState;

pub fn search_routes() -> Router<FeatureState> {
    Router::new()
        .route("/prefixPrefLabelSearch", get(prefix_pref_label_search))
        .route(
            "/prefixLabelSearch",
            get(prefix_label_search).post(prefix_label_search_with_taxa),
        )
        .route("/labelSearch", get(label_search))
        .route("/downloadLabels", get(download_labels))
}

#[tracing::instrument(skip(state, params))]
async fn prefix_pref_label_search(
    State(state): State<FeatureState>,
    params: Result<Query<TermSearchQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let docs = super::queries::prefix_pref_label::handle(&state, query).await?;
    Ok(Json(docs).into_response())
}

#[tracing::instrument(skip(state, params))]
async fn prefix_label_search(
    State(state): State<FeatureState>,
    params: Result<Query<TermSearchQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let docs = super::queries::prefix_label::handle_query(&state, query).await?;
    Ok(Json(docs).into_response())
}

#[tracing::instrument(skip(state, payload))]
async fn prefix_label_search_with_taxa(
    State(state): State<FeatureState>,
    payload: Result<Json<PrefixLabelRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let docs = super::queries::prefix_label::handle(&state, request).await?;
    Ok(Json(docs).into_response())
}

#[tracing::instrument(skip(state, params))]
async fn label_search(
    State(state): State<FeatureState>,
    params: Result<Query<TermSearchQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let docs = super::queries::label_search::handle(&state, query).await?;
    Ok(Json(docs).into_response())
}

#[tracing::instrument(skip(state, params))]
async fn download_labels(
    State(state): State<FeatureState>,
    params: Result<Query<DownloadLabelsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let projection = super::queries::download_labels::handle(&state, query).await?;
    Ok(projection.into_response())
}
