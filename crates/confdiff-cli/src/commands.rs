use std::path::Path;

use anyhow::Result;
use tracing::debug;

use confdiff_diff::diff_documents;
use confdiff_format::{render, OutputFormat};
use confdiff_parse::load_document;

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let output = generate_diff(&cli.first_file, &cli.second_file, cli.format.into())?;
    println!("{output}");
    Ok(())
}

/// Load both documents, build the diff, and render it in the requested
/// format.
pub fn generate_diff(first: &Path, second: &Path, format: OutputFormat) -> Result<String> {
    let old = load_document(first)?;
    let new = load_document(second)?;

    let diff = diff_documents(&old, &new);
    debug!(
        entries = diff.len(),
        changed = diff.has_changes(),
        "diff built"
    );

    Ok(render(&diff, format)?)
}
