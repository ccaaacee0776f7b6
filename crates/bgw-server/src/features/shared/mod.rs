//! Shared utilities for feature modules
//!
//! - **validation**: request parameter checks producing the service's 400 messages

pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{normalize_taxa, require_list, require_param, resolve_type};
