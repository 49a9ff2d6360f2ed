//! # Schema Resolution
//!
//! Name lookup and `$ref` handling. References are resolved lazily, at the
//! point traversal reaches them, so forward references between schemas work.

use swv_core::{SchemaDocument, SchemaNode, ValidatorError};

/// Look up a schema node by name.
///
/// # Errors
///
/// Returns [`ValidatorError::UnknownSchema`] if `name` is not declared in
/// the document.
pub fn resolve_by_name<'a>(
    document: &'a SchemaDocument,
    name: &str,
) -> Result<&'a SchemaNode, ValidatorError> {
    document
        .get(name)
        .ok_or_else(|| ValidatorError::UnknownSchema(name.to_string()))
}

/// Extract the schema name from a `$ref` string: its last `/`-delimited
/// segment. The rest of the pointer is not checked, so
/// `#/components/schemas/Pet`, `#/definitions/Pet` and `Pet` all name `Pet`.
pub fn resolve_ref(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
