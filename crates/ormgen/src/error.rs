//! Error types for ormgen

use thiserror::Error;

/// Result type alias for compilation operations
pub type GenResult<T> = Result<T, GenError>;

/// Error types for schema compilation
#[derive(Debug, Error)]
pub enum GenError {
    /// Unrecognized casing style in the options blob.
    ///
    /// This is a fatal configuration error: it is raised when options are
    /// applied, before any table is compiled.
    #[error("unsupported case style: '{0}' (expected one of: none, camel, pascal, snake)")]
    UnsupportedCaseStyle(String),

    /// Options blob could not be deserialized
    #[error("failed to parse options: {0}")]
    Options(#[from] serde_json::Error),
}

impl GenError {
    /// Check if this is a configuration error (aborts the whole run)
    pub fn is_config(&self) -> bool {
        matches!(self, Self::UnsupportedCaseStyle(_) | Self::Options(_))
    }
}
