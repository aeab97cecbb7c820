//! Json rendering: a pretty-printed serialization of the diff tree itself,
//! for machine consumers. Change descriptors carry a `status` tag; key
//! order follows the builder.

use confdiff_diff::Diff;

use crate::error::FormatResult;

/// Render a diff tree as pretty-printed JSON.
pub fn render(diff: &Diff) -> FormatResult<String> {
    Ok(serde_json::to_string_pretty(diff)?)
}
