//! Nodes whose field equals a value

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::features::shared::{require_param, resolve_type};
use crate::features::FeatureState;
use crate::query;
use bgw_common::Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldValueQuery {
    pub field: Option<String>,
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub limit: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn handle(state: &FeatureState, query: FieldValueQuery) -> AppResult<Vec<Document>> {
    let field = require_param(query.field.as_deref(), "Field")?;
    let value = require_param(query.value.as_deref(), "Value")?;
    let collection = resolve_type(query.node_type.as_deref())?;
    let limit = state.limits.resolve(query.limit.as_deref())?;

    let node_query = query::field_equals(collection, field, value, limit)?;
    let docs = node_query.fetch_all(state.store.as_ref()).await?;

    tracing::debug!(count = docs.len(), "Field value search completed");
    Ok(docs)
}
