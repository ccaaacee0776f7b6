pub mod queries;
pub mod routes;

pub use queries::{GenesForSymbolsRequest, GenesFromProtRequest};

pub use routes::genes_routes;
