//! Value normalization: the canonical textual form of a configuration
//! value, as embedded in rendered output.
//!
//! The two renderers disagree on purpose: plain quotes strings and
//! collapses containers to a placeholder, stylish leaves strings bare and
//! expands objects into indented brace blocks. Both share the scalar rules
//! (lower-case booleans, literal `null`, default decimal numbers) and the
//! indentation arithmetic lives here so the expanded-object form and the
//! tree renderer cannot drift apart.

use confdiff_types::ConfigValue;

/// Columns contributed by one level of nesting.
pub(crate) const INDENT_WIDTH: usize = 4;
/// Width of every change marker (`"+ "`, `"- "`, `"  "`).
pub(crate) const MARKER_WIDTH: usize = 2;

/// Placeholder for container values in plain output.
const COMPLEX_VALUE: &str = "[complex value]";

/// Indentation for a line at `depth`, with the marker width subtracted so
/// marker plus indent lands value text on a multiple of [`INDENT_WIDTH`].
pub(crate) fn indent(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        " ".repeat(INDENT_WIDTH * depth - MARKER_WIDTH)
    }
}

/// Wrap already-indented lines in a brace pair. The closing brace sits at
/// `indent(depth)` plus one marker column, except at the top level where it
/// is flush left. An empty `lines` still yields a brace pair.
pub(crate) fn wrap_block(lines: Vec<String>, depth: usize) -> String {
    let pad = indent(depth);
    let closing = if pad.is_empty() {
        "}".to_owned()
    } else {
        format!("{pad}  }}")
    };

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push("{".to_owned());
    out.extend(lines);
    out.push(closing);
    out.join("\n")
}

/// Normalize a value for stylish output at the given depth.
///
/// Strings are embedded bare, objects expand into a full brace block using
/// the same indent rules as the tree renderer but with a plain two-space
/// column in place of a change marker.
pub fn stylish_value(value: &ConfigValue, depth: usize) -> String {
    match value {
        ConfigValue::Null => "null".to_owned(),
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Number(n) => n.to_string(),
        ConfigValue::String(s) => s.clone(),
        ConfigValue::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| stylish_value(item, depth))
                .collect();
            format!("[{}]", items.join(", "))
        }
        ConfigValue::Object(map) => {
            let lines = map
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{}  {}: {}",
                        indent(depth + 1),
                        key,
                        stylish_value(val, depth + 1)
                    )
                })
                .collect();
            wrap_block(lines, depth)
        }
    }
}

/// Normalize a value for plain output.
///
/// Strings are single-quoted, containers collapse to `[complex value]`.
pub fn plain_value(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Null => "null".to_owned(),
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Number(n) => n.to_string(),
        ConfigValue::String(s) => format!("'{s}'"),
        ConfigValue::Array(_) | ConfigValue::Object(_) => COMPLEX_VALUE.to_owned(),
    }
}
