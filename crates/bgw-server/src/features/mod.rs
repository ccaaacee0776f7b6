//! Feature modules implementing the dictionary API
//!
//! Each feature is a vertical slice with its own request types and handlers
//! under `queries/` and its HTTP routes in `routes.rs`. The service is
//! read-only, so there are no command slices.
//!
//! # Features
//!
//! - **nodes**: single and batch node fetch, field/identifier/synonym matching
//! - **genes**: gene lookups by symbol or by encoded protein
//! - **search**: prefix and substring label search, label dumps
//! - **metadata**: literature evidence for TF/target-gene pairs

pub mod genes;
pub mod metadata;
pub mod nodes;
pub mod search;
pub mod shared;

use crate::query::Limits;
use crate::store::SharedStore;
use axum::Router;
use std::time::Duration;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Knowledge-graph node and edge collections
    pub store: SharedStore,
    /// Literature evidence sentences
    pub evidence: SharedStore,
    pub limits: Limits,
    /// Per-key timeout for batch lookups
    pub fetch_timeout: Option<Duration>,
}

/// Creates the API router with all feature routes mounted at the root
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(nodes::nodes_routes())
        .merge(genes::genes_routes())
        .merge(search::search_routes())
        .merge(metadata::metadata_routes())
        .with_state(state)
}
