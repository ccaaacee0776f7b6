//! Literature evidence for transcription factor / target gene pairs
//!
//! Evidence sentences are looked up by publication, by TF/TG symbol pair, or
//! by both at once. Any other combination of parameters is rejected before
//! the evidence store is queried.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::features::FeatureState;
use crate::store::{Filter, FindOptions};
use bgw_common::Document;

pub const EVIDENCE_COLLECTION: &str = "sentences";

const PUBMED_FIELD: &str = "pubmedId";
const TF_FIELD: &str = "TF";
const TG_FIELD: &str = "TG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenexMetadataQuery {
    #[serde(rename = "pubmedId")]
    pub pubmed_id: Option<String>,
    pub tf: Option<String>,
    pub tg: Option<String>,
}

/// The accepted parameter combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceLookup {
    /// One publication, one interaction
    Interaction { pubmed_id: String, tf: String, tg: String },
    /// Every sentence from a publication
    Publication { pubmed_id: String },
    /// Every sentence about a TF/TG pair
    Pair { tf: String, tg: String },
}

impl EvidenceLookup {
    pub fn from_query(query: GenexMetadataQuery) -> AppResult<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        match (present(query.pubmed_id), present(query.tf), present(query.tg)) {
            (Some(pubmed_id), Some(tf), Some(tg)) => Ok(Self::Interaction { pubmed_id, tf, tg }),
            (Some(pubmed_id), None, None) => Ok(Self::Publication { pubmed_id }),
            (None, Some(tf), Some(tg)) => Ok(Self::Pair { tf, tg }),
            _ => Err(AppError::Validation(
                "PubmedID or both TF and TG must be provided!".to_string(),
            )),
        }
    }

    pub fn filter(&self) -> Filter {
        match self {
            Self::Interaction { pubmed_id, tf, tg } => Filter::and(vec![
                Filter::eq(PUBMED_FIELD, pubmed_id.as_str()),
                Filter::eq(TF_FIELD, tf.as_str()),
                Filter::eq(TG_FIELD, tg.as_str()),
            ]),
            Self::Publication { pubmed_id } => Filter::eq(PUBMED_FIELD, pubmed_id.as_str()),
            Self::Pair { tf, tg } => Filter::and(vec![
                Filter::eq(TF_FIELD, tf.as_str()),
                Filter::eq(TG_FIELD, tg.as_str()),
            ]),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn handle(state: &FeatureState, query: GenexMetadataQuery) -> AppResult<Vec<Document>> {
    let lookup = EvidenceLookup::from_query(query)?;

    let docs = state
        .evidence
        .find(EVIDENCE_COLLECTION, &lookup.filter(), &FindOptions::default())
        .await?;

    tracing::debug!(?lookup, count = docs.len(), "Evidence lookup completed");
    Ok(docs)
}
