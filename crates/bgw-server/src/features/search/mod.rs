pub mod queries;
pub mod routes;

pub use queries::{DownloadLabelsQuery, PrefixLabelRequest, TermSearchQuery};

pub use routes::search_routes;
