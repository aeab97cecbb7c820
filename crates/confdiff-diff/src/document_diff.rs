//! Document-level diff: compare two configuration documents.
//!
//! Documents are order-preserving maps from string keys to [`ConfigValue`].
//! The diff visits the union of both key sets in sorted order, so entry
//! order in the resulting tree is deterministic regardless of source order.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use confdiff_types::{ConfigValue, Document};

/// The result of comparing two documents: an ordered mapping from key to
/// change descriptor. Nested descriptors carry a child `Diff` of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diff {
    /// The change descriptors, keyed by document key.
    pub entries: IndexMap<String, Change>,
}

impl Diff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if any descendant entry is something other than
    /// `Unchanged`.
    pub fn has_changes(&self) -> bool {
        self.entries.values().any(|change| match change {
            Change::Unchanged { .. } => false,
            Change::Nested { children } => children.has_changes(),
            _ => true,
        })
    }

    /// Number of added keys at this level.
    pub fn additions(&self) -> usize {
        self.entries
            .values()
            .filter(|c| matches!(c, Change::Added { .. }))
            .count()
    }

    /// Number of removed keys at this level.
    pub fn removals(&self) -> usize {
        self.entries
            .values()
            .filter(|c| matches!(c, Change::Removed { .. }))
            .count()
    }

    /// Number of updated keys at this level.
    pub fn updates(&self) -> usize {
        self.entries
            .values()
            .filter(|c| matches!(c, Change::Updated { .. }))
            .count()
    }
}

/// How a single key's value changed between the two documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Change {
    /// The key is present in both documents with identical values.
    Unchanged { value: ConfigValue },
    /// The key is present only in the second document.
    Added { value: ConfigValue },
    /// The key is present only in the first document.
    Removed { value: ConfigValue },
    /// The key is present in both documents with differing values.
    Updated { old: ConfigValue, new: ConfigValue },
    /// Both sides are objects; the comparison recursed into them.
    Nested { children: Diff },
}

/// Compute the diff between two documents.
///
/// Keys present only in `new` are `Added`, keys present only in `old` are
/// `Removed`. When both sides carry an object the walk recurses and the
/// entry becomes `Nested`, even if the two objects are equal. Equal scalar
/// values are `Unchanged`, anything else is `Updated`.
pub fn diff_documents(old: &Document, new: &Document) -> Diff {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    let mut entries = IndexMap::with_capacity(keys.len());
    for key in keys {
        let change = match (old.get(key), new.get(key)) {
            (Some(value), None) => Change::Removed {
                value: value.clone(),
            },
            (None, Some(value)) => Change::Added {
                value: value.clone(),
            },
            (Some(ConfigValue::Object(old_obj)), Some(ConfigValue::Object(new_obj))) => {
                Change::Nested {
                    children: diff_documents(old_obj, new_obj),
                }
            }
            (Some(old_val), Some(new_val)) => {
                if old_val == new_val {
                    Change::Unchanged {
                        value: old_val.clone(),
                    }
                } else {
                    Change::Updated {
                        old: old_val.clone(),
                        new: new_val.clone(),
                    }
                }
            }
            (None, None) => unreachable!("key taken from the union of both maps"),
        };
        entries.insert(key.clone(), change);
    }

    Diff { entries }
}
