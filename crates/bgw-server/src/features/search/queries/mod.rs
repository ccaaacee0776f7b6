//! Label searches over a single node collection
//!
//! The GET searches share one query string shape: `term`, `type` and an
//! optional `limit`.

use serde::{Deserialize, Serialize};

pub mod download_labels;
pub mod label_search;
pub mod prefix_label;
pub mod prefix_pref_label;

pub use download_labels::DownloadLabelsQuery;
pub use prefix_label::PrefixLabelRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermSearchQuery {
    pub term: Option<String>,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub limit: Option<String>,
}
