//! Diff engine for confdiff.
//!
//! Compares two parsed configuration documents key by key and produces an
//! ordered tree of change descriptors for the renderers to consume.
//!
//! # Key Types
//!
//! - [`Diff`] — Ordered mapping from key to change descriptor
//! - [`Change`] — Tagged change descriptor (added/removed/updated/nested/unchanged)
//! - [`diff_documents`] — The two-map key-union walk that builds a [`Diff`]

pub mod document_diff;

pub use document_diff::{diff_documents, Change, Diff};
