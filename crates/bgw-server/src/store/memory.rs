//! In-memory document store
//!
//! Collections are fixed at construction time. Natural order is insertion
//! order, matching the `seq` ordering of the PostgreSQL backend.

use super::{DocumentStore, Filter, FindOptions, StoreError, StoreResult};
use async_trait::async_trait;
use bgw_common::{types::{document_id, into_document}, Document};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or extend) a collection
    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        docs: impl IntoIterator<Item = Document>,
    ) -> Self {
        self.collections.entry(name.into()).or_default().extend(docs);
        self
    }

    /// Build a store from `{"collection": [doc, ...], ...}`
    pub fn from_json(value: Value) -> StoreResult<Self> {
        let Value::Object(collections) = value else {
            return Err(StoreError::invalid_document("<root>", "expected an object of collections"));
        };

        let mut store = Self::new();
        for (name, docs) in collections {
            let Value::Array(docs) = docs else {
                return Err(StoreError::invalid_document(&name, "expected an array of documents"));
            };

            let docs = docs
                .into_iter()
                .map(|doc| {
                    let doc = into_document(doc)
                        .ok_or_else(|| StoreError::invalid_document(&name, "document is not an object"))?;
                    match document_id(&doc) {
                        Some(_) => Ok(doc),
                        None => Err(StoreError::invalid_document(&name, "document has no string _id")),
                    }
                })
                .collect::<StoreResult<Vec<_>>>()?;

            store = store.with_collection(name, docs);
        }

        Ok(store)
    }

    fn collection(&self, name: &str) -> &[Document] {
        self.collections.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        Ok(self
            .collection(collection)
            .iter()
            .find(|doc| filter.matches(doc))
            .cloned())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StoreResult<Vec<Document>> {
        let matched = self
            .collection(collection)
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect();

        Ok(options.apply(matched))
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        Ok(self.collection(collection).len() as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
