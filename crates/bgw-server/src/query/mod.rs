//! Query builder
//!
//! Pure functions turning validated request parameters into a [`NodeQuery`]:
//! the target collection, a [`Filter`] and the sort/limit/projection options.
//! Nothing here touches the store; handlers run the resulting query against a
//! [`DocumentStore`].
//!
//! Client terms are always regex-escaped before being embedded in a pattern.

use crate::catalog::{resolve_by_uri, Collection, NODE_FIELDS};
use crate::store::{DocumentStore, Filter, FindOptions, Pattern, StoreResult};
use bgw_common::{Document, ID_FIELD};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Field '{field}' is not searchable in collection '{collection}'")]
    UnsearchableField { field: String, collection: Collection },

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Result-count bounds for list searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub default: usize,
    pub max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            default: 20,
            max: 1000,
        }
    }
}

impl Limits {
    /// Parse a client-supplied limit, falling back to the default and clamping to the maximum
    pub fn resolve(&self, raw: Option<&str>) -> QueryResult<usize> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(self.default.min(self.max));
        };

        match raw.parse::<usize>() {
            Ok(0) | Err(_) => Err(QueryError::InvalidLimit(raw.to_string())),
            Ok(limit) => Ok(limit.min(self.max)),
        }
    }
}

/// A fully specified read against one collection
#[derive(Debug, Clone, PartialEq)]
pub struct NodeQuery {
    pub collection: Collection,
    pub filter: Filter,
    pub options: FindOptions,
}

impl NodeQuery {
    fn new(collection: Collection, filter: Filter) -> Self {
        Self {
            collection,
            filter,
            options: FindOptions::default(),
        }
    }

    fn ranked(mut self, limit: usize) -> Self {
        self.options = FindOptions::new()
            .sort_desc(self.collection.schema().score_field)
            .limit(limit);
        self
    }

    pub async fn fetch_all(&self, store: &dyn DocumentStore) -> StoreResult<Vec<Document>> {
        store
            .find(self.collection.storage_name(), &self.filter, &self.options)
            .await
    }

    pub async fn fetch_one(&self, store: &dyn DocumentStore) -> StoreResult<Option<Document>> {
        store
            .find_one(self.collection.storage_name(), &self.filter)
            .await
    }
}

/// Single node by URI, routed by namespace
pub fn node_by_uri(uri: &str) -> NodeQuery {
    NodeQuery::new(resolve_by_uri(uri), Filter::eq(ID_FIELD, uri))
}

/// Single protein by exact preferred label
pub fn node_by_label(label: &str) -> NodeQuery {
    NodeQuery::new(Collection::Protein, Filter::eq(NODE_FIELDS.pref_label, label))
}

/// `{field: value}` restricted to the collection's searchable fields
pub fn field_equals(
    collection: Collection,
    field: &str,
    value: &str,
    limit: usize,
) -> QueryResult<NodeQuery> {
    if !collection.schema().is_searchable(field) {
        return Err(QueryError::UnsearchableField {
            field: field.to_string(),
            collection,
        });
    }

    Ok(NodeQuery::new(collection, Filter::eq(field, value)).ranked(limit))
}

/// Nodes carrying any of the given cross-reference identifiers, in natural order
pub fn identifier_batch(collection: Collection, values: &[String]) -> NodeQuery {
    NodeQuery::new(
        collection,
        Filter::is_in(NODE_FIELDS.identifiers, values.iter().cloned()),
    )
}

/// Nodes whose preferred label or lowercased synonyms are in `values`
///
/// The taxon constraint is only added when taxa are supplied.
pub fn synonym_batch(collection: Collection, values: &[String], taxa: Option<&[String]>) -> NodeQuery {
    let labels = Filter::or(vec![
        Filter::is_in(NODE_FIELDS.pref_label, values.iter().cloned()),
        Filter::is_in(NODE_FIELDS.lc_synonyms, values.iter().cloned()),
    ]);

    NodeQuery::new(collection, with_taxa(labels, taxa))
}

/// Case-sensitive anchored match on the preferred label
pub fn prefix_pref_label(collection: Collection, term: &str, limit: usize) -> QueryResult<NodeQuery> {
    let pattern = Pattern::prefix(term, false)?;
    Ok(NodeQuery::new(collection, Filter::regex(NODE_FIELDS.pref_label, pattern)).ranked(limit))
}

/// Case-insensitive anchored match on label and synonyms, or an exact URI
pub fn prefix_label(
    collection: Collection,
    term: &str,
    taxa: Option<&[String]>,
    limit: usize,
) -> QueryResult<NodeQuery> {
    let pattern = Pattern::prefix(&term.to_lowercase(), false)?;
    let matches = Filter::or(vec![
        Filter::regex(NODE_FIELDS.lc_label, pattern.clone()),
        Filter::regex(NODE_FIELDS.lc_synonyms, pattern),
        Filter::eq(ID_FIELD, term),
    ]);

    Ok(NodeQuery::new(collection, with_taxa(matches, taxa)).ranked(limit))
}

/// Case-insensitive substring match on the preferred label, or an exact URI
pub fn label_substring(collection: Collection, term: &str, limit: usize) -> QueryResult<NodeQuery> {
    let pattern = Pattern::contains(term, true)?;
    let matches = Filter::or(vec![
        Filter::regex(NODE_FIELDS.pref_label, pattern),
        Filter::eq(ID_FIELD, term),
    ]);

    Ok(NodeQuery::new(collection, matches).ranked(limit))
}

/// Every `{_id, prefLabel}` pair in a collection
pub fn label_dump(collection: Collection) -> NodeQuery {
    let mut query = NodeQuery::new(collection, Filter::All);
    query.options = FindOptions::new().projection([NODE_FIELDS.pref_label]);
    query
}

pub fn genes_by_symbol(symbol: &str) -> NodeQuery {
    NodeQuery::new(Collection::Gene, Filter::eq(NODE_FIELDS.pref_label, symbol))
}

pub fn genes_by_encoded_protein(protein_uri: &str) -> NodeQuery {
    NodeQuery::new(Collection::Gene, Filter::eq(NODE_FIELDS.encodes, protein_uri))
}

fn with_taxa(filter: Filter, taxa: Option<&[String]>) -> Filter {
    match taxa {
        Some(taxa) => Filter::and(vec![
            filter,
            Filter::is_in(NODE_FIELDS.taxon, taxa.iter().cloned()),
        ]),
        None => filter,
    }
}
