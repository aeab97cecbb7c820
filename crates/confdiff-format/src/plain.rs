//! Plain rendering: one English sentence per leaf change, addressed by
//! dotted key path.
//!
//! Entries are visited depth-first in the order the diff builder inserted
//! them; nothing is re-sorted here. Unchanged entries and the nested
//! containers themselves contribute no sentences, only their descendants
//! do.

use confdiff_diff::{Change, Diff};

use crate::value::plain_value;

/// Render a diff tree as newline-joined sentences. An all-unchanged (or
/// empty) tree renders as the empty string.
pub fn render(diff: &Diff) -> String {
    let mut lines = Vec::new();
    collect(diff, "", &mut lines);
    lines.join("\n")
}

fn collect(diff: &Diff, path: &str, lines: &mut Vec<String>) {
    for (key, change) in &diff.entries {
        match change {
            Change::Nested { children } => {
                collect(children, &format!("{path}{key}."), lines);
            }
            Change::Added { value } => {
                lines.push(format!(
                    "Property '{path}{key}' was added with value: {}",
                    plain_value(value)
                ));
            }
            Change::Removed { .. } => {
                lines.push(format!("Property '{path}{key}' was removed"));
            }
            Change::Updated { old, new } => {
                lines.push(format!(
                    "Property '{path}{key}' was updated. From {} to {}",
                    plain_value(old),
                    plain_value(new)
                ));
            }
            Change::Unchanged { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdiff_diff::diff_documents;
    use confdiff_types::{ConfigValue, Document};

    fn doc(json: &str) -> Document {
        match serde_json::from_str(json).unwrap() {
            ConfigValue::Object(map) => map,
            other => panic!("expected object fixture, got {:?}", other),
        }
    }

    #[test]
    fn empty_diff_renders_nothing() {
        assert_eq!(render(&Diff::new()), "");
    }

    #[test]
    fn unchanged_entries_render_nothing() {
        let old = doc(r#"{"a": 1, "b": {"c": true}}"#);
        let diff = diff_documents(&old, &old);
        assert_eq!(render(&diff), "");
    }

    #[test]
    fn updated_and_nested_added() {
        let old = doc(r#"{"a": 1, "b": {}}"#);
        let new = doc(r#"{"a": 2, "b": {"c": 3}}"#);
        let diff = diff_documents(&old, &new);

        assert_eq!(
            render(&diff),
            "Property 'a' was updated. From 1 to 2\n\
             Property 'b.c' was added with value: 3"
        );
    }

    #[test]
    fn sentence_templates() {
        let old = doc(r#"{"gone": "bye", "kept": 1, "mode": "dev"}"#);
        let new = doc(r#"{"fresh": true, "kept": 1, "mode": "prod"}"#);
        let diff = diff_documents(&old, &new);

        let expected = "\
Property 'fresh' was added with value: true
Property 'gone' was removed
Property 'mode' was updated. From 'dev' to 'prod'";
        assert_eq!(render(&diff), expected);
    }

    #[test]
    fn container_values_use_placeholder() {
        let old = doc(r#"{"settings": "none"}"#);
        let new = doc(r#"{"settings": {"deep": {"deeper": 1}}}"#);
        let diff = diff_documents(&old, &new);

        assert_eq!(
            render(&diff),
            "Property 'settings' was updated. From 'none' to [complex value]"
        );
    }

    #[test]
    fn dotted_paths_through_multiple_levels() {
        let old = doc(r#"{"common": {"setting6": {"doge": {"wow": ""}}}}"#);
        let new = doc(r#"{"common": {"setting6": {"doge": {"wow": "so much"}}}}"#);
        let diff = diff_documents(&old, &new);

        assert_eq!(
            render(&diff),
            "Property 'common.setting6.doge.wow' was updated. From '' to 'so much'"
        );
    }

    #[test]
    fn one_line_per_leaf_change() {
        let old = doc(r#"{"a": {"x": 1, "y": 2}, "b": 5, "same": true}"#);
        let new = doc(r#"{"a": {"x": 9, "z": 3}, "c": 6, "same": true}"#);
        let diff = diff_documents(&old, &new);

        let rendered = render(&diff);
        // a.x updated, a.y removed, a.z added, b removed, c added; `same`
        // and the container `a` itself contribute nothing.
        assert_eq!(rendered.lines().count(), 5);
        assert!(!rendered.contains("'same'"));
        assert!(!rendered.contains("Property 'a' "));
    }

    #[test]
    fn entries_follow_builder_insertion_order() {
        use confdiff_diff::Change;
        use indexmap::IndexMap;

        let mut entries = IndexMap::new();
        entries.insert(
            "zebra".to_owned(),
            Change::Removed {
                value: ConfigValue::from(1),
            },
        );
        entries.insert(
            "apple".to_owned(),
            Change::Added {
                value: ConfigValue::from(2),
            },
        );
        let diff = Diff { entries };

        // No re-sorting: zebra first, exactly as inserted.
        assert_eq!(
            render(&diff),
            "Property 'zebra' was removed\nProperty 'apple' was added with value: 2"
        );
    }
}
