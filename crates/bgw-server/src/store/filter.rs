//! Store-agnostic query predicates
//!
//! [`Filter`] is the small predicate language every backend understands:
//! equality, set membership, pattern match, and boolean composition. The
//! in-memory backend evaluates it directly with [`Filter::matches`]; the
//! PostgreSQL backend compiles it to SQL.
//!
//! Array-valued fields follow document-store semantics: `Eq`/`In` match when
//! any element matches, and `Regex` matches when any string element matches.

use bgw_common::Document;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::cmp::Ordering;

// ============================================================================
// Patterns
// ============================================================================

/// A compiled regular expression plus the source it was built from
///
/// The source is kept so SQL backends can forward it verbatim.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    compiled: Regex,
}

impl Pattern {
    /// Compile a raw regular expression
    pub fn new(source: impl Into<String>, case_insensitive: bool) -> Result<Self, regex::Error> {
        let source = source.into();
        let compiled = RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()?;

        Ok(Self {
            source,
            case_insensitive,
            compiled,
        })
    }

    /// Anchored match of a literal term at the start of the value
    pub fn prefix(term: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        Self::new(format!("^{}", regex::escape(term)), case_insensitive)
    }

    /// Unanchored match of a literal term anywhere in the value
    pub fn contains(term: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        Self::new(regex::escape(term), case_insensitive)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Predicate over a single document
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document
    All,
    Eq { field: String, value: Value },
    In { field: String, values: Vec<Value> },
    Regex { field: String, pattern: Pattern },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_in<V: Into<Value>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Filter::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn regex(field: impl Into<String>, pattern: Pattern) -> Self {
        Filter::Regex {
            field: field.into(),
            pattern,
        }
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And(filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Filter::Or(filters)
    }

    /// Evaluate the predicate against a document
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => value_equals(doc.get(field), value),
            Filter::In { field, values } => {
                let actual = doc.get(field);
                values.iter().any(|candidate| value_equals(actual, candidate))
            },
            Filter::Regex { field, pattern } => match doc.get(field) {
                Some(Value::String(text)) => pattern.is_match(text),
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|text| pattern.is_match(text)),
                _ => false,
            },
            Filter::And(filters) => filters.iter().all(|f| f.matches(doc)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(doc)),
        }
    }
}

fn value_equals(actual: Option<&Value>, expected: &Value) -> bool {
    match actual {
        None | Some(Value::Null) => expected.is_null(),
        Some(Value::Array(items)) => {
            items.iter().any(|item| item == expected) || matches!(expected, Value::Array(e) if e == items)
        },
        Some(value) => value == expected,
    }
}

// ============================================================================
// Find options
// ============================================================================

/// Descending sort on one field; documents without it come last
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
}

/// Sort, limit and projection applied after filtering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindOptions {
    pub sort: Option<Sort>,
    pub limit: Option<usize>,
    /// Fields to keep; `_id` is always kept
    pub projection: Option<Vec<String>>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_desc(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(Sort { field: field.into() });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn projection<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.projection = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Apply sort, limit and projection to an already filtered result set
    ///
    /// The sort is stable, so ties keep their natural order.
    pub fn apply(&self, mut docs: Vec<Document>) -> Vec<Document> {
        if let Some(ref sort) = self.sort {
            docs.sort_by(|a, b| compare_values(a.get(&sort.field), b.get(&sort.field)).reverse());
        }

        if let Some(limit) = self.limit {
            docs.truncate(limit);
        }

        match self.projection {
            Some(ref fields) => docs.into_iter().map(|doc| project(doc, fields)).collect(),
            None => docs,
        }
    }
}

fn project(doc: Document, fields: &[String]) -> Document {
    doc.into_iter()
        .filter(|(key, _)| key == bgw_common::ID_FIELD || fields.iter().any(|f| f == key))
        .collect()
}

/// Total order across JSON values: missing/null < numbers < strings < objects < arrays < booleans
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Number(_)) => 1,
            Some(Value::String(_)) => 2,
            Some(Value::Object(_)) => 3,
            Some(Value::Array(_)) => 4,
            Some(Value::Bool(_)) => 5,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        },
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
