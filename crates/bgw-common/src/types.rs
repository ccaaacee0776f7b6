//! Document model shared across the workspace
//!
//! Every record in the knowledge graph (node, edge or evidence sentence) is a
//! schemaless JSON object whose primary key lives under [`ID_FIELD`].

use serde_json::{Map, Value};

/// Primary-key field carried by every stored document.
pub const ID_FIELD: &str = "_id";

/// A stored record: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Returns the document's primary key when it is a string.
pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get(ID_FIELD).and_then(Value::as_str)
}

/// Builds a document from a JSON value, returning `None` for non-objects.
pub fn into_document(value: Value) -> Option<Document> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id() {
        let doc = into_document(json!({"_id": "http://rdf.biogateway.eu/prot/P04637"})).unwrap();
        assert_eq!(document_id(&doc), Some("http://rdf.biogateway.eu/prot/P04637"));
    }

    #[test]
    fn test_document_id_non_string() {
        let doc = into_document(json!({"_id": 42})).unwrap();
        assert_eq!(document_id(&doc), None);
    }

    #[test]
    fn test_into_document_rejects_arrays() {
        assert!(into_document(json!([1, 2, 3])).is_none());
        assert!(into_document(json!("text")).is_none());
    }
}
