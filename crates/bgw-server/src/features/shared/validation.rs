//! Shared request validation
//!
//! Parameters are checked before any store call. Missing parameters produce
//! `"<Name> not provided!"`; an empty string counts as missing.

use crate::catalog::{resolve_by_type, Collection};
use crate::error::{AppError, AppResult};

/// A required scalar parameter
pub fn require_param<'a>(value: Option<&'a str>, name: &str) -> AppResult<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::missing(name))
}

/// A required list parameter; an empty list is valid and yields no results
pub fn require_list<'a>(values: Option<&'a [String]>, name: &str) -> AppResult<&'a [String]> {
    values.ok_or_else(|| AppError::missing(name))
}

/// Resolve a required `type` parameter to its collection
pub fn resolve_type(type_name: Option<&str>) -> AppResult<Collection> {
    let type_name = require_param(type_name, "Type")?;
    Ok(resolve_by_type(type_name)?)
}

/// Taxon constraint, where an empty list means no constraint
pub fn normalize_taxa(taxa: Option<&[String]>) -> Option<&[String]> {
    taxa.filter(|t| !t.is_empty())
}
