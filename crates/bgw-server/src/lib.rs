//! BioGateway Server Library
//!
//! Read-only HTTP lookup service over the BioGateway knowledge graph.
//!
//! # Overview
//!
//! The server answers dictionary-style queries against a pre-populated graph
//! of proteins, genes, ontology terms, taxa and their relations:
//!
//! - **Node lookup**: single and batch fetch by URI or label
//! - **Matching**: by field value, cross-reference identifier or synonym
//! - **Label search**: case-sensitive and case-insensitive prefix search,
//!   substring search and full label dumps
//! - **Genes**: lookups by symbol and by encoded protein
//! - **Evidence**: literature sentences for TF/target-gene pairs
//!
//! # Architecture
//!
//! Requests flow through four layers:
//!
//! - [`catalog`] maps URIs and type names to collections and describes each
//!   collection's fields, score key and searchable fields
//! - [`query`] turns validated parameters into a [`query::NodeQuery`]
//! - [`store`] runs queries against a [`store::DocumentStore`] backend
//!   (PostgreSQL JSONB in production, in-memory for tests)
//! - [`projector`] renders results as JSON or TSV
//!
//! Batch endpoints fan out one lookup per key through [`batch`], which keeps
//! the response aligned with the request order.
//!
//! # Example
//!
//! ```no_run
//! use bgw_server::{api, config::Config, features::FeatureState, query::Limits, store::MemoryStore};
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let store = Arc::new(MemoryStore::new());
//! let state = FeatureState {
//!     store: store.clone(),
//!     evidence: store,
//!     limits: Limits::default(),
//!     fetch_timeout: config.query.fetch_timeout(),
//! };
//! let app = api::create_router(state, &config);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3002").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod projector;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, AppResult};
