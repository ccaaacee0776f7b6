//! Test fixtures for feature handlers
//!
//! A small knowledge graph covering every collection the handlers touch,
//! served from a [`MemoryStore`].

use crate::features::FeatureState;
use crate::query::Limits;
use crate::store::MemoryStore;
use serde_json::json;
use std::sync::Arc;

pub const TP53_HUMAN: &str = "http://rdf.biogateway.eu/prot/P04637";
pub const TP53_MOUSE: &str = "http://rdf.biogateway.eu/prot/P02340";
pub const BRCA1_HUMAN: &str = "http://rdf.biogateway.eu/prot/P38398";
pub const TP53_GENE: &str = "http://rdf.biogateway.eu/gene/9606/TP53";
pub const APOPTOSIS: &str = "http://purl.obolibrary.org/obo/GO_0006915";

pub fn fixture_store() -> MemoryStore {
    MemoryStore::from_json(json!({
        "prot": [
            {
                "_id": TP53_HUMAN,
                "prefLabel": "P53_HUMAN",
                "lcLabel": "p53_human",
                "synonyms": ["TP53", "p53"],
                "lcSynonyms": ["tp53", "p53"],
                "definition": "Cellular tumor antigen p53",
                "instances": ["P04637", "ENSP00000269305"],
                "taxon": "9606",
                "refScore": 50
            },
            {
                "_id": TP53_MOUSE,
                "prefLabel": "P53_MOUSE",
                "lcLabel": "p53_mouse",
                "synonyms": ["Trp53", "p53"],
                "lcSynonyms": ["trp53", "p53"],
                "definition": "Cellular tumor antigen p53",
                "instances": ["P02340"],
                "taxon": "10090",
                "refScore": 20
            },
            {
                "_id": BRCA1_HUMAN,
                "prefLabel": "BRCA1_HUMAN",
                "lcLabel": "brca1_human",
                "synonyms": ["BRCA1", "RNF53"],
                "lcSynonyms": ["brca1", "rnf53"],
                "definition": "Breast cancer type 1 susceptibility protein",
                "instances": ["P38398"],
                "taxon": "9606",
                "refScore": 40
            },
            {
                "_id": "http://rdf.biogateway.eu/prot/Q00001",
                "prefLabel": "ABRCA1_HUMAN",
                "lcLabel": "abrca1_human",
                "definition": "Fictional BRCA1 decoy",
                "taxon": "9606",
                "refScore": 90
            }
        ],
        "gene": [
            {
                "_id": TP53_GENE,
                "prefLabel": "TP53",
                "lcLabel": "tp53",
                "definition": "tumor protein p53",
                "encodes": TP53_HUMAN,
                "reviewed": true,
                "taxon": "9606",
                "refScore": 10
            },
            {
                "_id": "http://rdf.biogateway.eu/gene/9606/TP53-AS1",
                "prefLabel": "TP53",
                "lcLabel": "tp53",
                "definition": "unreviewed duplicate symbol",
                "encodes": TP53_HUMAN,
                "reviewed": false,
                "taxon": "9606",
                "refScore": 1
            }
        ],
        "goall": [
            {
                "_id": APOPTOSIS,
                "prefLabel": "apoptotic process",
                "lcLabel": "apoptotic process",
                "definition": "A programmed cell death process",
                "refScore": 5
            }
        ],
        "prot2prot": [
            {
                "_id": "http://rdf.biogateway.eu/prot-prot/P04637--P38398",
                "subject": TP53_HUMAN,
                "object": BRCA1_HUMAN
            }
        ]
    }))
    .expect("fixture")
}

pub fn evidence_store() -> MemoryStore {
    MemoryStore::from_json(json!({
        "sentences": [
            {"_id": "s1", "pubmedId": "100", "TF": "TP53", "TG": "MDM2", "sentence": "TP53 activates MDM2."},
            {"_id": "s2", "pubmedId": "100", "TF": "MYC", "TG": "CDK4", "sentence": "MYC induces CDK4."},
            {"_id": "s3", "pubmedId": "200", "TF": "TP53", "TG": "MDM2", "sentence": "p53 binds the MDM2 promoter."}
        ]
    }))
    .expect("fixture")
}

pub fn test_state() -> FeatureState {
    FeatureState {
        store: Arc::new(fixture_store()),
        evidence: Arc::new(evidence_store()),
        limits: Limits::default(),
        fetch_timeout: None,
    }
}
