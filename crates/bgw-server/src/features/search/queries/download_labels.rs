//! Full `{prefLabel, _id}` dump of one node collection

use serde::{Deserialize, Serialize};

use crate::catalog::resolve_label_source;
use crate::error::AppResult;
use crate::features::shared::require_param;
use crate::features::FeatureState;
use crate::projector::{Projection, ReturnType};
use crate::query;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadLabelsQuery {
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub format: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn handle(state: &FeatureState, query: DownloadLabelsQuery) -> AppResult<Projection> {
    let name = require_param(query.node_type.as_deref(), "Type")?;
    let collection = resolve_label_source(name)?;

    let docs = query::label_dump(collection)
        .fetch_all(state.store.as_ref())
        .await?;

    tracing::info!(collection = %collection, count = docs.len(), "Label dump prepared");
    Ok(Projection::labels(
        docs,
        ReturnType::from_param(query.format.as_deref()),
    ))
}
