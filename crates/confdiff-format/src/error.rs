//! Error types for the format crate.

/// Errors that can occur while rendering a diff.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Serialization of the diff tree failed (json output only).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for render results.
pub type FormatResult<T> = Result<T, FormatError>;
