pub mod response;

use crate::config::Config;
use crate::features::{self, FeatureState};
use crate::middleware;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::compression::CompressionLayer;

/// Build the application router with all routes and middleware
///
/// Routes are mounted under `config.server.base_path` when one is set.
pub fn create_router(state: FeatureState, config: &Config) -> Router {
    let routes = Router::new()
        .route("/test", get(connection_test))
        .route("/health", get(health_check))
        .with_state(state.clone())
        .merge(features::router(state));

    let base_path = config.server.base_path.trim_end_matches('/');
    let app = if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(base_path, routes)
    };

    // Apply layers from innermost to outermost
    app.layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn connection_test() -> Html<&'static str> {
    Html("<h1>Connection Successful!</h1> <p>Successfully connected to BioGateway REST endpoint.</p>")
}

/// Health check handler
async fn health_check(State(state): State<FeatureState>) -> Response {
    let (store, evidence) = tokio::join!(state.store.ping(), state.evidence.ping());

    match (store, evidence) {
        (Ok(()), Ok(())) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": state.store.backend(),
                "evidence": state.evidence.backend(),
            })),
        )
            .into_response(),
        (store, evidence) => {
            if let Err(ref e) = store {
                tracing::error!("Node store health check failed: {:?}", e);
            }
            if let Err(ref e) = evidence {
                tracing::error!("Evidence store health check failed: {:?}", e);
            }
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "store": if store.is_ok() { "connected" } else { "unreachable" },
                    "evidence": if evidence.is_ok() { "connected" } else { "unreachable" },
                })),
            )
                .into_response()
        },
    }
}
