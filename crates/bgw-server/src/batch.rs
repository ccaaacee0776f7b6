//! Batch fetch orchestration
//!
//! Multi-key endpoints run one store lookup per key concurrently and join on
//! all of them. The result list always has one entry per input key, in input
//! order. A key that matched nothing is [`Lookup::Missing`]; a key whose
//! lookup failed or timed out is [`Lookup::Failed`] and never aborts the rest
//! of the batch.

use crate::query::{self, NodeQuery};
use crate::store::{DocumentStore, StoreError, StoreResult};
use bgw_common::Document;
use futures::future::join_all;
use std::{fmt::Display, future::Future, time::Duration};

/// Outcome of a single keyed lookup
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Failed(StoreError),
}

impl<T> Lookup<T> {
    /// Collapse to the wire form, where misses and failures are both `null`
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing | Lookup::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Lookup::Failed(_))
    }
}

/// Per-batch outcome counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub missing: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn of<T>(lookups: &[Lookup<T>]) -> Self {
        lookups.iter().fold(Self::default(), |mut summary, lookup| {
            match lookup {
                Lookup::Found(_) => summary.found += 1,
                Lookup::Missing => summary.missing += 1,
                Lookup::Failed(_) => summary.failed += 1,
            }
            summary
        })
    }
}

/// Run `lookup` for every key concurrently and collect the outcomes in key order
pub async fn fetch_many<K, T, F, Fut>(keys: &[K], timeout: Option<Duration>, lookup: F) -> Vec<Lookup<T>>
where
    K: Clone + Display,
    F: Fn(K) -> Fut,
    Fut: Future<Output = StoreResult<Option<T>>>,
{
    let pending = keys.iter().map(|key| {
        let fut = lookup(key.clone());
        async move {
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, fut)
                    .await
                    .unwrap_or_else(|_| Err(StoreError::Timeout(limit))),
                None => fut.await,
            };

            match result {
                Ok(Some(value)) => Lookup::Found(value),
                Ok(None) => Lookup::Missing,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Batch lookup failed");
                    Lookup::Failed(e)
                },
            }
        }
    });

    join_all(pending).await
}

/// Fetch nodes by URI, routing each URI to its own collection
#[tracing::instrument(skip(store, uris), fields(count = uris.len()))]
pub async fn fetch_nodes_by_uri(
    store: &dyn DocumentStore,
    uris: &[String],
    timeout: Option<Duration>,
) -> Vec<Lookup<Document>> {
    fetch_many(uris, timeout, move |uri| async move {
        query::node_by_uri(&uri).fetch_one(store).await
    })
    .await
}

/// Run a list query per key against one collection
///
/// An empty match list is still `Found`; only failures differ from success.
#[tracing::instrument(skip(store, keys, build), fields(count = keys.len()))]
pub async fn fetch_matches(
    store: &dyn DocumentStore,
    keys: &[String],
    timeout: Option<Duration>,
    build: fn(&str) -> NodeQuery,
) -> Vec<Lookup<Vec<Document>>> {
    fetch_many(keys, timeout, move |key| async move {
        build(&key).fetch_all(store).await.map(Some)
    })
    .await
}
