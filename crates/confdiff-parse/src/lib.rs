//! Input layer for confdiff.
//!
//! Maps file extensions to source formats and parses JSON or YAML text
//! into the shared document model. Everything downstream of this crate is
//! format-agnostic.
//!
//! # Key Types
//!
//! - [`SourceFormat`] — Recognized source syntaxes and extension mapping
//! - [`parse_str`] / [`load_document`] — Text and file entry points
//! - [`ParseError`] — Unsupported extensions, I/O, and syntax failures

pub mod error;
pub mod format;
pub mod load;

pub use error::{ParseError, ParseResult};
pub use format::{SourceFormat, SUPPORTED_EXTENSIONS};
pub use load::{load_document, parse_str};
