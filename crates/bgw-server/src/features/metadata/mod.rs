pub mod queries;
pub mod routes;

pub use queries::{EvidenceLookup, GenexMetadataQuery};

pub use routes::metadata_routes;
