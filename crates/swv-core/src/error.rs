//! # Error Hierarchy
//!
//! Structured error types for the validator, built with `thiserror`.
//!
//! Two layers exist:
//!
//! - [`ValidatorError`] — a whole-call failure (undecodable input, unknown
//!   root schema, empty schema name). These short-circuit: the call reports
//!   the single error and performs no traversal.
//! - [`ValidationError`] — one field violation at a specific path. These
//!   accumulate; a single pass reports every violation it finds.
//!
//! Display strings are part of the diagnostic contract and are consumed
//! verbatim by callers, so they must not change.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A whole-call validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// The data payload is not valid structured data. Carries the decoder's
    /// message unchanged.
    #[error("{0}")]
    InputDecode(String),

    /// The schema document is not valid structured data, or its
    /// `components.schemas` layout is not a mapping.
    #[error("{0}")]
    SchemaDecode(String),

    /// A schema name (root or `$ref` target) is absent from the document.
    #[error("Unknown schema {0}")]
    UnknownSchema(String),

    /// The root schema name is empty.
    #[error("Please specify a schema name")]
    MissingSchemaName,

    /// A reference chain loops back on itself, or traversal exceeded the
    /// maximum depth.
    #[error("{path}: {detail}")]
    CycleOrDepthExceeded {
        /// Diagnostic path at which the bound was hit.
        path: String,
        /// What was exceeded (cycle chain or depth limit).
        detail: String,
    },
}

impl ValidatorError {
    /// Stable machine-readable label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputDecode(_) => "input_decode",
            Self::SchemaDecode(_) => "schema_decode",
            Self::UnknownSchema(_) => "unknown_schema",
            Self::MissingSchemaName => "missing_schema_name",
            Self::CycleOrDepthExceeded { .. } => "cycle_or_depth_exceeded",
        }
    }

    /// Degrade this error into a violation at `path`.
    ///
    /// Used for problems found mid-traversal (an unknown `$ref` target, a
    /// reference cycle), which are reported where they occur instead of
    /// aborting the pass. A cycle error keeps the path it was raised at.
    pub fn into_violation(self, path: &str) -> ValidationError {
        match self {
            Self::CycleOrDepthExceeded { path, detail } => ValidationError {
                path,
                message: detail,
            },
            other => ValidationError::new(path, other.to_string()),
        }
    }
}

/// A single field violation: where in the data it applies and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Dotted/bracketed diagnostic path, rooted at the schema name.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Build a violation at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
