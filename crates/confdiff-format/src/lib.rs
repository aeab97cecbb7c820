//! Output formats for confdiff.
//!
//! Renders a diff tree produced by `confdiff-diff` into one of three
//! textual styles. All renderers are pure functions over an immutable
//! tree; rendering the same tree twice yields byte-identical output.
//!
//! # Key Types
//!
//! - [`OutputFormat`] / [`render`] -- Style selection and dispatch
//! - [`stylish`] -- Indented brace block with `+`/`-` change markers
//! - [`plain`] -- One sentence per leaf change, dotted key paths
//! - [`json`] -- Machine-readable serialization of the diff tree

pub mod error;
pub mod json;
pub mod plain;
pub mod stylish;
pub mod value;

pub use error::{FormatError, FormatResult};
pub use value::{plain_value, stylish_value};

use confdiff_diff::Diff;

/// The available output styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented brace-delimited block (the default).
    #[default]
    Stylish,
    /// Flat sentences with dotted key paths.
    Plain,
    /// Pretty-printed JSON of the diff tree.
    Json,
}

/// Render `diff` in the requested style.
pub fn render(diff: &Diff, format: OutputFormat) -> FormatResult<String> {
    match format {
        OutputFormat::Stylish => Ok(stylish::render(diff)),
        OutputFormat::Plain => Ok(plain::render(diff)),
        OutputFormat::Json => json::render(diff),
    }
}
