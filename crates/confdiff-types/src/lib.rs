//! Foundation types for confdiff.
//!
//! This crate provides the configuration value model shared by the parser,
//! the diff builder, and the renderers. Every other confdiff crate depends
//! on `confdiff-types`.
//!
//! # Key Types
//!
//! - [`ConfigValue`] — Closed variant set over the configuration value domain
//! - [`Document`] — An order-preserving top-level mapping of a parsed file

pub mod value;

pub use value::{ConfigValue, Document};
