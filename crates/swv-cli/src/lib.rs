//! # swv-cli — Command-Line Caller for the Swagger Validator
//!
//! Provides the `swv` binary. File handling, output formatting, and exit
//! codes live here; every validation decision is delegated to `swv-schema`.
//!
//! ## Subcommands
//!
//! - `swv validate` — check one JSON payload against a named schema.
//! - `swv schemas` — list the component schemas a document declares.
//!
//! ```bash
//! swv validate --swagger swaggers/user.yaml --schema User samples/invalid-data-1.json
//! swv schemas --swagger swaggers/user.yaml
//! ```
//!
//! ## Exit Codes
//!
//! `0` valid, `1` diagnostics reported (or the document failed to decode),
//! `2` operational error such as an unreadable file.

pub mod schemas;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

/// Read a UTF-8 input file, attaching the path to any I/O error.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
