//! Fetch a single node by URI or by exact label

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::features::FeatureState;
use crate::query;
use bgw_common::Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchNodeQuery {
    pub uri: Option<String>,
    /// Exact protein label, used when no URI is given
    pub label: Option<String>,
}

enum NodeKey<'a> {
    Uri(&'a str),
    Label(&'a str),
}

impl FetchNodeQuery {
    fn key(&self) -> AppResult<NodeKey<'_>> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        match (present(&self.uri), present(&self.label)) {
            (Some(uri), _) => Ok(NodeKey::Uri(uri)),
            (None, Some(label)) => Ok(NodeKey::Label(label)),
            (None, None) => Err(AppError::missing("URI or label")),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn handle(state: &FeatureState, query: FetchNodeQuery) -> AppResult<Document> {
    let node_query = match query.key()? {
        NodeKey::Uri(uri) => query::node_by_uri(uri),
        NodeKey::Label(label) => query::node_by_label(label),
    };

    node_query
        .fetch_one(state.store.as_ref())
        .await?
        .ok_or_else(|| {
            tracing::debug!(collection = %node_query.collection, "Node not found");
            AppError::node_not_found()
        })
}
