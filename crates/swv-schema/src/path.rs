//! # Diagnostic Paths
//!
//! Paths are plain strings built by concatenation, since they are only ever
//! delivered inside flat diagnostic messages:
//!
//! ```text
//! root            User
//! property        User.job
//! items schema    User.tags[]
//! element         User.tags[][3]
//! nested arrays   User.grid[][0][][1]
//! ```
//!
//! An array element is always addressed through the items segment, so a
//! single-level array element reads `tags[][3]`, not `tags[3]`. Existing
//! consumers match on this form.

/// Path of the root schema.
pub fn root(schema_name: &str) -> String {
    schema_name.to_string()
}

/// Path of object property `name` under `base`.
pub fn property(base: &str, name: &str) -> String {
    format!("{base}.{name}")
}

/// Path of the items schema of the array at `base`.
pub fn items(base: &str) -> String {
    format!("{base}[]")
}

/// Path of element `index`, given the items path from [`items`].
pub fn element(items_path: &str, index: usize) -> String {
    format!("{items_path}[{index}]")
}
