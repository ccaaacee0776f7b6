pub mod queries;
pub mod routes;

pub use queries::{
    FetchNodeQuery, FetchNodesRequest, FieldValueQuery, IdentifierRequest, SynonymRequest,
};

pub use routes::nodes_routes;
