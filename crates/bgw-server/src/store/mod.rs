//! Document store abstraction
//!
//! The dictionary is read-only: every collection is a set of JSON documents
//! keyed by `_id`, and the service only ever filters, sorts, limits and
//! projects them. [`DocumentStore`] captures exactly that surface so the HTTP
//! layer can run against PostgreSQL in production and an in-memory store in
//! tests.

use async_trait::async_trait;
use bgw_common::Document;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

pub mod filter;
pub mod memory;
pub mod postgres;

pub use filter::{Filter, FindOptions, Pattern, Sort};
pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// Store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Store lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid document in collection '{collection}': {reason}")]
    InvalidDocument { collection: String, reason: String },
}

impl StoreError {
    pub fn invalid_document(collection: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to named document collections
///
/// Unknown collections behave as empty ones.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name used in logs and health output
    fn backend(&self) -> &'static str;

    /// First document matching the filter, in natural order
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// All documents matching the filter, after applying the options
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StoreResult<Vec<Document>>;

    async fn count(&self, collection: &str) -> StoreResult<u64>;

    /// Verify the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}

/// Shared handle stored in application state
pub type SharedStore = Arc<dyn DocumentStore>;
