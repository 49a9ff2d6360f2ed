//! # swv-schema — Component Schema Validation
//!
//! Checks a decoded payload against a named schema from an OpenAPI-style
//! `components.schemas` document and reports every violation as a
//! path-qualified message.
//!
//! ## Entry Points
//!
//! - [`validate`] — typed: whole-call failures come back as
//!   [`ValidatorError`](swv_core::ValidatorError), field violations as a
//!   `Vec<ValidationError>`.
//! - [`validate_messages`] — the same result flattened to diagnostic strings.
//! - [`validate_source`] — decodes raw payload/document text first; this is
//!   what the CLI and HTTP callers use.
//!
//! ## Crate Policy
//!
//! - Depends only on `swv-core` internally.
//! - The engine is a pure function: no I/O, no logging, no shared state.
//!   Callers own tracing and decide where to run it.
//! - Diagnostic strings are a compatibility contract; see [`path`] for the
//!   path grammar.

pub mod path;
pub mod resolve;
pub mod validate;

pub use resolve::{resolve_by_name, resolve_ref};
pub use validate::{validate, validate_messages, validate_source, validate_str, MAX_DEPTH};
