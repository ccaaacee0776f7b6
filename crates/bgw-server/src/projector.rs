//! Result projection to JSON or TSV
//!
//! JSON responses pass documents through unchanged. TSV responses use fixed
//! headers; the `description` column carries each document's `definition`
//! field.

use crate::catalog::NODE_FIELDS;
use bgw_common::{Document, ID_FIELD};
use serde_json::Value;
use std::fmt::Write;

/// Requested response encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnType {
    #[default]
    Json,
    Tsv,
}

impl ReturnType {
    /// `"tsv"` selects TSV; anything else, including nothing, is JSON
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("tsv") => ReturnType::Tsv,
            _ => ReturnType::Json,
        }
    }
}

/// A rendered response body
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Json(Value),
    Tsv(String),
}

impl Projection {
    /// Positionally aligned nodes; misses stay `null` in JSON and are dropped from TSV
    pub fn nodes(nodes: Vec<Option<Document>>, return_type: ReturnType, extra_fields: &[String]) -> Self {
        match return_type {
            ReturnType::Tsv => Projection::Tsv(node_rows(&nodes, extra_fields)),
            ReturnType::Json => Projection::Json(Value::Array(
                nodes
                    .into_iter()
                    .map(|node| node.map_or(Value::Null, Value::Object))
                    .collect(),
            )),
        }
    }

    /// A plain result list
    pub fn documents(docs: Vec<Document>, return_type: ReturnType) -> Self {
        match return_type {
            ReturnType::Tsv => {
                let nodes: Vec<_> = docs.into_iter().map(Some).collect();
                Projection::Tsv(node_rows(&nodes, &[]))
            },
            ReturnType::Json => Projection::Json(Value::Array(docs.into_iter().map(Value::Object).collect())),
        }
    }

    /// One match list per key
    pub fn gene_groups(groups: Vec<Option<Vec<Document>>>, return_type: ReturnType) -> Self {
        match return_type {
            ReturnType::Tsv => Projection::Tsv(gene_rows(&groups)),
            ReturnType::Json => Projection::Json(Value::Array(
                groups
                    .into_iter()
                    .map(|group| {
                        group.map_or(Value::Null, |docs| {
                            Value::Array(docs.into_iter().map(Value::Object).collect())
                        })
                    })
                    .collect(),
            )),
        }
    }

    pub fn labels(docs: Vec<Document>, return_type: ReturnType) -> Self {
        match return_type {
            ReturnType::Tsv => Projection::Tsv(label_rows(&docs)),
            ReturnType::Json => Projection::Json(Value::Array(docs.into_iter().map(Value::Object).collect())),
        }
    }
}

const NODE_HEADER: [&str; 3] = ["uri", "prefLabel", "description"];
const GENE_HEADER: [&str; 4] = ["uri", "prefLabel", "description", "reviewed"];
const LABEL_HEADER: [&str; 2] = ["label", "uri"];

/// Node rows, one per non-null entry, with extra columns in the order requested
///
/// An extra field that a document lacks is left out of that row entirely, so
/// rows with missing extras are shorter than the header.
pub fn node_rows(nodes: &[Option<Document>], extra_fields: &[String]) -> String {
    let mut out = header(NODE_HEADER.iter().copied().chain(extra_fields.iter().map(String::as_str)));

    for node in nodes.iter().flatten() {
        let mut row = vec![
            cell(node.get(ID_FIELD)),
            cell(node.get(NODE_FIELDS.pref_label)),
            cell(node.get(NODE_FIELDS.definition)),
        ];
        row.extend(
            extra_fields
                .iter()
                .filter_map(|field| node.get(field).filter(|v| !v.is_null()))
                .map(|value| cell(Some(value))),
        );
        push_row(&mut out, &row);
    }

    out
}

/// Gene rows, flattening each key's matches in key order
pub fn gene_rows(groups: &[Option<Vec<Document>>]) -> String {
    let mut out = header(GENE_HEADER);

    for gene in groups.iter().flatten().flatten() {
        push_row(
            &mut out,
            &[
                cell(gene.get(ID_FIELD)),
                cell(gene.get(NODE_FIELDS.pref_label)),
                cell(gene.get(NODE_FIELDS.definition)),
                cell(gene.get(NODE_FIELDS.reviewed)),
            ],
        );
    }

    out
}

/// `label<TAB>uri` rows for a label dump
pub fn label_rows(docs: &[Document]) -> String {
    let mut out = header(LABEL_HEADER);

    for doc in docs {
        push_row(&mut out, &[cell(doc.get(NODE_FIELDS.pref_label)), cell(doc.get(ID_FIELD))]);
    }

    out
}

/// Render one TSV cell
///
/// Tabs and newlines inside values become spaces so every row stays on one line.
pub fn cell(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    };

    sanitize(text)
}

fn sanitize(text: String) -> String {
    if text.contains(['\t', '\n', '\r']) {
        text.replace(['\t', '\n', '\r'], " ")
    } else {
        text
    }
}

fn header<'a>(columns: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = columns
        .into_iter()
        .map(|column| sanitize(column.to_string()))
        .collect::<Vec<_>>()
        .join("\t");
    out.push('\n');
    out
}

fn push_row(out: &mut String, row: &[String]) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", row.join("\t"));
}
