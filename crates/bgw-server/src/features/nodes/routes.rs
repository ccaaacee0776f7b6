use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::queries::{
    FetchNodeQuery, FetchNodesRequest, FieldValueQuery, IdentifierRequest, SynonymRequest,
};
use crate::error::AppResult;
use crate::features::FeatureState;

pub fn nodes_routes() -> Router<FeatureState> {
    Router::new()
        .route("/fetch", get(fetch_node).post(fetch_nodes))
        .route("/findNodesWithFieldValue", get(find_with_field_value))
        .route("/findNodesWithIdentifier", post(find_with_identifier))
        .route("/findNodesWithSynonyms", post(find_with_synonyms))
}

#[tracing::instrument(skip(state, params))]
async fn fetch_node(
    State(state): State<FeatureState>,
    params: Result<Query<FetchNodeQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let node = super::queries::fetch_node::handle(&state, query).await?;
    Ok(Json(node).into_response())
}

#[tracing::instrument(skip(state, payload))]
async fn fetch_nodes(
    State(state): State<FeatureState>,
    payload: Result<Json<FetchNodesRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let response = super::queries::fetch_nodes::handle(&state, request).await?;

    tracing::debug!(failures = response.failures, "Batch fetch completed");

    Ok(response.into_response())
}

#[tracing::instrument(skip(state, params))]
async fn find_with_field_value(
    State(state): State<FeatureState>,
    params: Result<Query<FieldValueQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = params?;
    let docs = super::queries::find_with_field_value::handle(&state, query).await?;
    Ok(Json(docs).into_response())
}

#[tracing::instrument(skip(state, payload))]
async fn find_with_identifier(
    State(state): State<FeatureState>,
    payload: Result<Json<IdentifierRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let projection = super::queries::find_with_identifier::handle(&state, request).await?;
    Ok(projection.into_response())
}

#[tracing::instrument(skip(state, payload))]
async fn find_with_synonyms(
    State(state): State<FeatureState>,
    payload: Result<Json<SynonymRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let projection = super::queries::find_with_synonyms::handle(&state, request).await?;
    Ok(projection.into_response())
}
