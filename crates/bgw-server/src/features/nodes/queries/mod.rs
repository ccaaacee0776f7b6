pub mod fetch_node;
pub mod fetch_nodes;
pub mod find_with_field_value;
pub mod find_with_identifier;
pub mod find_with_synonyms;

pub use fetch_node::FetchNodeQuery;
pub use fetch_nodes::FetchNodesRequest;
pub use find_with_field_value::FieldValueQuery;
pub use find_with_identifier::IdentifierRequest;
pub use find_with_synonyms::SynonymRequest;
