//! Error types for the input layer.

use std::path::PathBuf;

use crate::format::SUPPORTED_EXTENSIONS;

/// Errors that can occur while loading or parsing a document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file extension is not among the recognized set.
    #[error(
        "unsupported extension: \"{extension}\" (supported extensions are: {})",
        SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedExtension { extension: String },

    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its top level is not a mapping.
    #[error("top level of a configuration document must be a mapping, got {found}")]
    NotAMapping { found: &'static str },
}

/// Convenience alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;
