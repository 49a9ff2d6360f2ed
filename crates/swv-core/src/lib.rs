#![deny(missing_docs)]

//! # swv-core — Foundational Types for the Swagger Validator
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies, only `serde_json`,
//! `serde_yaml`, `indexmap`, and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Closed tagged variants.** Both the decoded payload ([`DataValue`]) and
//!    the schema tree ([`SchemaNode`]) are enums matched exhaustively. There
//!    are no runtime casts that can fail on an unexpected shape.
//!
//! 2. **Decoding never panics on a bad node.** A structurally invalid schema
//!    node decodes to [`SchemaNode::Malformed`], which the engine reports as a
//!    violation only when traversal reaches it.
//!
//! 3. **Stable ordering.** Object keys keep their decoding order and schema
//!    properties keep their declaration order (`IndexMap`), so diagnostic
//!    lists are reproducible.
//!
//! 4. **[`ValidatorError`] hierarchy.** Structured errors with `thiserror`;
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod data;
pub mod error;
pub mod schema;

// Re-export primary types at crate root for ergonomic imports.
pub use data::DataValue;
pub use error::{ValidationError, ValidatorError};
pub use schema::{SchemaDocument, SchemaKind, SchemaNode};
