//! Stylish rendering: an indented, brace-delimited block with one marker
//! column per entry.
//!
//! Keys are re-sorted lexicographically at every level, whatever order the
//! diff builder produced. An updated key emits two lines, the old value
//! (`- `) before the new (`+ `). The output is meant to be visually
//! diffable, so the column arithmetic in [`crate::value`] is load-bearing.

use confdiff_diff::{Change, Diff};

use crate::value::{indent, stylish_value, wrap_block};

const ADDED: &str = "+ ";
const REMOVED: &str = "- ";
const UNCHANGED: &str = "  ";

/// Render a diff tree as a stylish block.
pub fn render(diff: &Diff) -> String {
    render_at(diff, 0)
}

fn render_at(diff: &Diff, depth: usize) -> String {
    let base = indent(depth + 1);

    let mut entries: Vec<(&String, &Change)> = diff.entries.iter().collect();
    entries.sort_by_key(|(key, _)| *key);

    let mut lines = Vec::with_capacity(entries.len());
    for (key, change) in entries {
        match change {
            Change::Nested { children } => {
                lines.push(format!(
                    "{base}{UNCHANGED}{key}: {}",
                    render_at(children, depth + 1)
                ));
            }
            Change::Unchanged { value } => {
                lines.push(format!(
                    "{base}{UNCHANGED}{key}: {}",
                    stylish_value(value, depth + 1)
                ));
            }
            Change::Added { value } => {
                lines.push(format!(
                    "{base}{ADDED}{key}: {}",
                    stylish_value(value, depth + 1)
                ));
            }
            Change::Removed { value } => {
                lines.push(format!(
                    "{base}{REMOVED}{key}: {}",
                    stylish_value(value, depth + 1)
                ));
            }
            Change::Updated { old, new } => {
                lines.push(format!(
                    "{base}{REMOVED}{key}: {}",
                    stylish_value(old, depth + 1)
                ));
                lines.push(format!(
                    "{base}{ADDED}{key}: {}",
                    stylish_value(new, depth + 1)
                ));
            }
        }
    }

    wrap_block(lines, depth)
}
