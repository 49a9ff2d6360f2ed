//! # Decoded Data Model
//!
//! [`DataValue`] is the closed representation of a decoded JSON payload.
//! The validation engine only ever matches on it; it never inspects raw
//! `serde_json::Value`s.
//!
//! Numbers are held as `f64`; integer-ness is a property of the value, not
//! of its spelling, so `5` and `5.0` decode identically. Object keys keep
//! their decoding order, which fixes the order of "unexpected prop"
//! diagnostics.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ValidatorError;

/// A decoded, immutable JSON-like value.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// `null`, or an absent property.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// A JSON string.
    String(String),
    /// An ordered sequence.
    Array(Vec<DataValue>),
    /// A mapping with unique keys in decoding order.
    Object(IndexMap<String, DataValue>),
}

impl DataValue {
    /// Decode a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InputDecode`] carrying the `serde_json`
    /// error message when `payload` is not valid JSON.
    pub fn from_json_str(payload: &str) -> Result<Self, ValidatorError> {
        serde_json::from_str::<Value>(payload)
            .map(Self::from)
            .map_err(|e| ValidatorError::InputDecode(e.to_string()))
    }

    /// Label for the runtime kind of this value, as used in diagnostics.
    ///
    /// The vocabulary is kept compatible with existing diagnostics:
    /// numbers are reported as `float64` and booleans as `bool`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "nil",
            Self::Bool(_) => "bool",
            Self::Number(_) => "float64",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns true for [`DataValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Look up an object member. Returns `None` for non-objects and for
    /// absent keys alike.
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl From<Value> for DataValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            // as_f64 is always Some without serde_json's arbitrary_precision.
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
