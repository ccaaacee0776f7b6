//! BioGateway Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types and logging setup for the BioGateway dictionary workspace.
//!
//! # Overview
//!
//! - **Logging**: `tracing` subscriber configuration with console/file targets
//! - **Types**: the JSON document model shared by the store and the HTTP layer
//!
//! # Example
//!
//! ```no_run
//! use bgw_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("Dictionary service starting");
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{Document, ID_FIELD};
