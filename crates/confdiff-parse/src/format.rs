//! Source format detection by file extension.

use std::path::Path;

use crate::error::{ParseError, ParseResult};

/// Extensions the parser recognizes.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// A recognized source syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Determine the source format from a file extension.
    pub fn from_extension(extension: &str) -> ParseResult<Self> {
        match extension {
            "json" => Ok(SourceFormat::Json),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            other => Err(ParseError::UnsupportedExtension {
                extension: other.to_owned(),
            }),
        }
    }

    /// Determine the source format from a file path. A missing extension
    /// is reported the same way as an unrecognized one.
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }
}
