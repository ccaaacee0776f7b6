//! Collection catalog
//!
//! Every logical collection of the knowledge graph is described by one row of
//! [`SCHEMAS`]: its storage name, what kind of documents it holds, the field
//! names the query builder relies on, the relevance sort key, the fields a
//! client may filter on directly, and the indexes the store is expected to
//! carry. Collection-shape differences live here as data.
//!
//! The PostgreSQL migration creates an index for every hint, and a test
//! checks that the two agree.

pub mod router;

pub use router::{resolve_by_type, resolve_by_uri, resolve_label_source, CatalogError, URI_NAMESPACES};

/// A logical partition of the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Protein,
    Disease,
    Gene,
    GoTerm,
    GoBiologicalProcess,
    GoCellularComponent,
    GoMolecularFunction,
    Taxon,
    TfacToGene,
    ProtToProt,
    ProtToOnto,
    All,
}

impl Collection {
    pub const ALL: [Collection; 12] = [
        Collection::Protein,
        Collection::Disease,
        Collection::Gene,
        Collection::GoTerm,
        Collection::GoBiologicalProcess,
        Collection::GoCellularComponent,
        Collection::GoMolecularFunction,
        Collection::Taxon,
        Collection::TfacToGene,
        Collection::ProtToProt,
        Collection::ProtToOnto,
        Collection::All,
    ];

    pub fn schema(self) -> &'static CollectionSchema {
        &SCHEMAS[self as usize]
    }

    /// Name of the backing collection in the store
    pub fn storage_name(self) -> &'static str {
        self.schema().name
    }

    pub fn kind(self) -> CollectionKind {
        self.schema().kind
    }

    /// Look up a collection by its storage name
    ///
    /// Accepts the legacy `proteins`/`genes` names as aliases.
    pub fn from_storage_name(name: &str) -> Option<Self> {
        match name {
            "proteins" => Some(Collection::Protein),
            "genes" => Some(Collection::Gene),
            _ => Self::ALL.into_iter().find(|c| c.storage_name() == name),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Biological entities with labels and synonyms
    Node,
    /// Relations between nodes, only reachable by URI
    Edge,
    /// Union of all node collections
    CatchAll,
}

/// Field names used by node documents
#[derive(Debug, Clone, Copy)]
pub struct NodeFields {
    pub pref_label: &'static str,
    pub lc_label: &'static str,
    pub synonyms: &'static str,
    pub lc_synonyms: &'static str,
    pub definition: &'static str,
    pub identifiers: &'static str,
    pub taxon: &'static str,
    pub encodes: &'static str,
    pub reviewed: &'static str,
}

pub const NODE_FIELDS: NodeFields = NodeFields {
    pref_label: "prefLabel",
    lc_label: "lcLabel",
    synonyms: "synonyms",
    lc_synonyms: "lcSynonyms",
    definition: "definition",
    identifiers: "instances",
    taxon: "taxon",
    encodes: "encodes",
    reviewed: "reviewed",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Ascending,
    Descending,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHint {
    pub field: &'static str,
    pub kind: IndexKind,
}

const fn index(field: &'static str, kind: IndexKind) -> IndexHint {
    IndexHint { field, kind }
}

#[derive(Debug)]
pub struct CollectionSchema {
    pub collection: Collection,
    pub name: &'static str,
    pub kind: CollectionKind,
    pub fields: NodeFields,
    /// Relevance score, sorted descending
    pub score_field: &'static str,
    /// Fields accepted by direct field-equality search
    pub searchable_fields: &'static [&'static str],
    pub indexes: &'static [IndexHint],
}

impl CollectionSchema {
    pub fn is_searchable(&self, field: &str) -> bool {
        self.searchable_fields.contains(&field)
    }
}

const SCORE_FIELD: &str = "refScore";

const NODE_SEARCHABLE: &[&str] = &[
    "_id",
    "prefLabel",
    "lcLabel",
    "synonyms",
    "lcSynonyms",
    "definition",
    "instances",
    "taxon",
];

const GENE_SEARCHABLE: &[&str] = &[
    "_id",
    "prefLabel",
    "lcLabel",
    "synonyms",
    "lcSynonyms",
    "definition",
    "instances",
    "taxon",
    "encodes",
    "reviewed",
];

const EDGE_SEARCHABLE: &[&str] = &["_id"];

const CATCH_ALL_SEARCHABLE: &[&str] =
    &["_id", "prefLabel", "lcLabel", "synonyms", "lcSynonyms", "instances"];

const LABELLED_INDEXES: &[IndexHint] = &[
    index("definition", IndexKind::Text),
    index("lcLabel", IndexKind::Ascending),
    index("prefLabel", IndexKind::Ascending),
    index("refScore", IndexKind::Descending),
    index("lcSynonyms", IndexKind::Ascending),
    index("synonyms", IndexKind::Ascending),
];

const GO_INDEXES: &[IndexHint] = &[
    index("definition", IndexKind::Ascending),
    index("lcLabel", IndexKind::Text),
    index("prefLabel", IndexKind::Ascending),
    index("refScore", IndexKind::Descending),
    index("lcSynonyms", IndexKind::Ascending),
    index("synonyms", IndexKind::Ascending),
];

const fn node(
    collection: Collection,
    name: &'static str,
    searchable_fields: &'static [&'static str],
    indexes: &'static [IndexHint],
) -> CollectionSchema {
    CollectionSchema {
        collection,
        name,
        kind: CollectionKind::Node,
        fields: NODE_FIELDS,
        score_field: SCORE_FIELD,
        searchable_fields,
        indexes,
    }
}

const fn edge(collection: Collection, name: &'static str) -> CollectionSchema {
    CollectionSchema {
        collection,
        name,
        kind: CollectionKind::Edge,
        fields: NODE_FIELDS,
        score_field: SCORE_FIELD,
        searchable_fields: EDGE_SEARCHABLE,
        indexes: &[],
    }
}

/// One row per [`Collection`], in declaration order
pub static SCHEMAS: [CollectionSchema; 12] = [
    node(Collection::Protein, "prot", NODE_SEARCHABLE, LABELLED_INDEXES),
    node(Collection::Disease, "omim", NODE_SEARCHABLE, &[]),
    node(Collection::Gene, "gene", GENE_SEARCHABLE, LABELLED_INDEXES),
    node(Collection::GoTerm, "goall", NODE_SEARCHABLE, GO_INDEXES),
    node(Collection::GoBiologicalProcess, "gobp", NODE_SEARCHABLE, &[]),
    node(Collection::GoCellularComponent, "gocc", NODE_SEARCHABLE, &[]),
    node(Collection::GoMolecularFunction, "gomf", NODE_SEARCHABLE, &[]),
    node(Collection::Taxon, "taxon", NODE_SEARCHABLE, &[]),
    edge(Collection::TfacToGene, "tfac2gene"),
    edge(Collection::ProtToProt, "prot2prot"),
    edge(Collection::ProtToOnto, "prot2onto"),
    CollectionSchema {
        collection: Collection::All,
        name: "all",
        kind: CollectionKind::CatchAll,
        fields: NODE_FIELDS,
        score_field: SCORE_FIELD,
        searchable_fields: CATCH_ALL_SEARCHABLE,
        indexes: &[],
    },
];
