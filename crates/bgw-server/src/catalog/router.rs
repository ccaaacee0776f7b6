//! Routing of URIs and type names to collections

use super::{Collection, CollectionKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),
}

/// URI namespaces and the collection each one lives in
///
/// Prefixes do not overlap, so the first literal match is the only match.
pub const URI_NAMESPACES: &[(&str, Collection)] = &[
    ("http://rdf.biogateway.eu/prot/", Collection::Protein),
    ("http://purl.bioontology.org/ontology/OMIM/", Collection::Disease),
    ("http://rdf.biogateway.eu/gene/", Collection::Gene),
    ("http://purl.obolibrary.org/obo/GO_", Collection::GoTerm),
    ("http://purl.obolibrary.org/obo/NCBITaxon_", Collection::Taxon),
    ("http://purl.obolibrary.org/obo/PR_", Collection::Protein),
    ("http://rdf.biogateway.eu/prot-gene/", Collection::TfacToGene),
    ("http://rdf.biogateway.eu/prot-prot/", Collection::ProtToProt),
    ("http://rdf.biogateway.eu/prot-obo/", Collection::ProtToOnto),
];

/// Collection holding the document with this URI; unknown namespaces map to `all`
pub fn resolve_by_uri(uri: &str) -> Collection {
    URI_NAMESPACES
        .iter()
        .find(|(prefix, _)| uri.starts_with(prefix))
        .map(|&(_, collection)| collection)
        .unwrap_or(Collection::All)
}

/// Collection for a client-facing type name such as `protein` or `go-bp`
pub fn resolve_by_type(type_name: &str) -> Result<Collection, CatalogError> {
    Collection::ALL
        .into_iter()
        .find(|c| c.type_name() == Some(type_name))
        .ok_or_else(|| CatalogError::UnsupportedType(type_name.to_string()))
}

/// Collection whose labels can be dumped, by type name or node storage name
pub fn resolve_label_source(name: &str) -> Result<Collection, CatalogError> {
    resolve_by_type(name).or_else(|err| {
        Collection::from_storage_name(name)
            .filter(|c| c.kind() != CollectionKind::Edge)
            .ok_or(err)
    })
}

impl Collection {
    /// Client-facing type name; edge collections have none
    pub fn type_name(self) -> Option<&'static str> {
        match self {
            Collection::Protein => Some("protein"),
            Collection::Disease => Some("disease"),
            Collection::Gene => Some("gene"),
            Collection::GoTerm => Some("go-term"),
            Collection::GoBiologicalProcess => Some("go-bp"),
            Collection::GoCellularComponent => Some("go-cc"),
            Collection::GoMolecularFunction => Some("go-mf"),
            Collection::Taxon => Some("taxon"),
            Collection::All => Some("all"),
            Collection::TfacToGene | Collection::ProtToProt | Collection::ProtToOnto => None,
        }
    }
}
