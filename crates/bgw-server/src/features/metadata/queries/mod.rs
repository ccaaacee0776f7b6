pub mod genex_metadata;

pub use genex_metadata::{EvidenceLookup, GenexMetadataQuery};
