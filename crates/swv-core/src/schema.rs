//! # Component Schema Model
//!
//! The schema tree a payload is validated against, decoded from the
//! `components.schemas` section of an OpenAPI-style document.
//!
//! ## Decoding Policy
//!
//! Document-level problems (text that is not YAML, a `components` or
//! `schemas` entry that is not a mapping) fail the whole decode with
//! [`ValidatorError::SchemaDecode`]. Problems inside a single schema node
//! never do: the node decodes to [`SchemaNode::Malformed`] and its siblings
//! decode normally. The engine reports a malformed node only if traversal
//! actually reaches it with data.
//!
//! `$ref` strings are kept as written and resolved lazily at validation
//! time, so schemas may reference names declared later in the document.

use std::fmt;

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::error::ValidatorError;

/// The value kinds a schema node can declare through `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// `type: object`
    Object,
    /// `type: string`
    String,
    /// `type: integer`
    Integer,
    /// `type: number`
    Number,
    /// `type: boolean`
    Boolean,
    /// `type: array`
    Array,
}

impl SchemaKind {
    /// The `type` keyword value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }

    /// Parse a `type` keyword value. Returns `None` for anything outside the
    /// supported vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "object" => Some(Self::Object),
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `type: object`.
    Object {
        /// Declared properties, in declaration order. `None` when the
        /// keyword is absent: the object is free-form and accepts any keys.
        /// `Some` of an empty map declares no keys at all.
        properties: Option<IndexMap<String, SchemaNode>>,
        /// Required property names. `None` when the keyword is absent,
        /// which disables required checking.
        required: Option<Vec<String>>,
        /// Whether undeclared keys are accepted. Defaults to `false`.
        additional_properties: bool,
    },
    /// `type: string`.
    String,
    /// `type: integer`.
    Integer,
    /// `type: number`.
    Number,
    /// `type: boolean`.
    Boolean,
    /// `type: array` with its single element schema.
    Array {
        /// Schema every element must satisfy.
        items: Box<SchemaNode>,
    },
    /// `$ref: '#/components/schemas/Name'`.
    Reference {
        /// The reference string as written.
        path: String,
    },
    /// A node declaring neither `type` nor `$ref`; accepts any value.
    Any,
    /// A node whose shape could not be decoded.
    Malformed {
        /// Why the node was rejected.
        reason: String,
    },
}

impl SchemaNode {
    /// Decode a single schema node. Never fails; see the module docs.
    pub fn from_yaml(value: &Value) -> Self {
        let map = match untag(value) {
            Value::Mapping(map) => map,
            _ => return malformed("schema node must be a mapping"),
        };

        let type_field = map.get("type").map(untag);
        let ref_field = map.get("$ref").map(untag);

        match (type_field, ref_field) {
            (Some(_), Some(_)) => malformed("`$ref` cannot be combined with `type`"),
            (None, Some(Value::String(path))) => Self::Reference { path: path.clone() },
            (None, Some(_)) => malformed("`$ref` must be a string"),
            (None, None) => Self::Any,
            (Some(Value::String(name)), None) => match SchemaKind::from_name(name) {
                Some(kind) => Self::decode_kind(kind, map),
                None => malformed(format!("unsupported type \"{name}\"")),
            },
            (Some(_), None) => malformed("`type` must be a string"),
        }
    }

    fn decode_kind(kind: SchemaKind, map: &Mapping) -> Self {
        match kind {
            SchemaKind::Object => decode_object(map),
            SchemaKind::Array => match map.get("items") {
                Some(items) => Self::Array {
                    items: Box::new(Self::from_yaml(items)),
                },
                None => malformed("array schema requires `items`"),
            },
            SchemaKind::String => Self::String,
            SchemaKind::Integer => Self::Integer,
            SchemaKind::Number => Self::Number,
            SchemaKind::Boolean => Self::Boolean,
        }
    }

    /// The declared kind, or `None` for references, `Any`, and malformed nodes.
    pub fn kind(&self) -> Option<SchemaKind> {
        match self {
            Self::Object { .. } => Some(SchemaKind::Object),
            Self::String => Some(SchemaKind::String),
            Self::Integer => Some(SchemaKind::Integer),
            Self::Number => Some(SchemaKind::Number),
            Self::Boolean => Some(SchemaKind::Boolean),
            Self::Array { .. } => Some(SchemaKind::Array),
            Self::Reference { .. } | Self::Any | Self::Malformed { .. } => None,
        }
    }
}

fn malformed(reason: impl Into<String>) -> SchemaNode {
    SchemaNode::Malformed {
        reason: reason.into(),
    }
}

fn decode_object(map: &Mapping) -> SchemaNode {
    let properties = match map.get("properties").map(untag) {
        None | Some(Value::Null) => None,
        Some(Value::Mapping(props)) => {
            let mut declared = IndexMap::with_capacity(props.len());
            for (key, value) in props {
                let name = match mapping_key(key) {
                    Ok(name) => name,
                    Err(reason) => return malformed(reason),
                };
                declared.insert(name, SchemaNode::from_yaml(value));
            }
            Some(declared)
        }
        Some(_) => return malformed("`properties` must be a mapping"),
    };

    let required = match map.get("required").map(untag) {
        None | Some(Value::Null) => None,
        Some(Value::Sequence(items)) => {
            let mut names = Vec::with_capacity(items.len());
            for item in items {
                match untag(item) {
                    Value::String(name) => names.push(name.clone()),
                    _ => return malformed("`required` must be a sequence of property names"),
                }
            }
            Some(names)
        }
        Some(_) => return malformed("`required` must be a sequence of property names"),
    };

    // A schema-valued additionalProperties permits extra keys; their values
    // are not checked.
    let additional_properties = match map.get("additionalProperties").map(untag) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(allowed)) => *allowed,
        Some(Value::Mapping(_)) => true,
        Some(_) => return malformed("`additionalProperties` must be a boolean or a schema"),
    };

    SchemaNode::Object {
        properties,
        required,
        additional_properties,
    }
}

/// Strip YAML tags; only the tagged value matters here.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Coerce a mapping key to a string. Numeric and boolean keys are
/// stringified; anything else is rejected.
fn mapping_key(key: &Value) -> Result<String, String> {
    match untag(key) {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("unsupported mapping key: {other:?}")),
    }
}

/// The named schemas of a document, keyed by schema name.
///
/// Immutable once built; validation only reads from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    schemas: IndexMap<String, SchemaNode>,
}

impl SchemaDocument {
    /// Wrap an already-built schema mapping.
    pub fn new(schemas: IndexMap<String, SchemaNode>) -> Self {
        Self { schemas }
    }

    /// Decode a YAML (or JSON) document and extract `components.schemas`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::SchemaDecode`] if the text is not YAML or
    /// the `components.schemas` layout is not made of mappings.
    pub fn from_yaml_str(source: &str) -> Result<Self, ValidatorError> {
        let value: Value = serde_yaml::from_str(source)
            .map_err(|e| ValidatorError::SchemaDecode(e.to_string()))?;
        Self::from_yaml_value(&value)
    }

    /// Extract `components.schemas` from an already-parsed document.
    ///
    /// A document without `components` or without `components.schemas`
    /// yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::SchemaDecode`] if the top level,
    /// `components`, or `components.schemas` is present but not a mapping.
    pub fn from_yaml_value(value: &Value) -> Result<Self, ValidatorError> {
        let root = match untag(value) {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(map) => map,
            _ => return Err(decode_error("document root must be a mapping")),
        };
        let components = match root.get("components").map(untag) {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Mapping(map)) => map,
            Some(_) => return Err(decode_error("`components` must be a mapping")),
        };
        let schemas = match components.get("schemas").map(untag) {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Mapping(map)) => map,
            Some(_) => return Err(decode_error("`components.schemas` must be a mapping")),
        };

        let mut decoded = IndexMap::with_capacity(schemas.len());
        for (key, node) in schemas {
            let name = mapping_key(key).map_err(ValidatorError::SchemaDecode)?;
            decoded.insert(name, SchemaNode::from_yaml(node));
        }
        Ok(Self { schemas: decoded })
    }

    /// Look up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Schema names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Number of named schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if the document declares no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl FromIterator<(String, SchemaNode)> for SchemaDocument {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        Self {
            schemas: iter.into_iter().collect(),
        }
    }
}

fn decode_error(reason: &str) -> ValidatorError {
    ValidatorError::SchemaDecode(reason.to_string())
}
