//! Error types for `nql-core`.
//!
//! Unifies query compilation and configuration failures behind one type
//! for callers that handle both.

use thiserror::Error;

use crate::config::ConfigError;
use crate::query::CompileError;

/// Result type alias for `nql-core` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `nql-core` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Query compilation error (NQL-001).
    ///
    /// Carries position and fragment information from the grammar.
    #[error("[NQL-001] Query error: {0}")]
    Query(#[from] CompileError),

    /// Configuration error (NQL-002).
    #[error("[NQL-002] Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the error code (e.g., "NQL-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Query(_) => "NQL-001",
            Self::Config(_) => "NQL-002",
        }
    }
}
