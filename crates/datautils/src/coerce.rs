//! Explicit coercions from arbitrary values to the shapes the other modules
//! work with.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::{Error, Result};

/// Human-readable name of a value's JSON type, used in error messages.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// String form of a value: strings are borrowed as-is, everything else is
/// rendered as compact JSON text (`null`, `true`, `1.5`, `[1,2]`, ...).
pub fn display_string(v: &Value) -> Cow<'_, str> {
    match v {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Borrow the elements of an array value.
///
/// `null` stands for an absent list and yields an empty slice. Any other
/// non-array type is reported as [`Error::TypeMismatch`].
pub fn array_or_empty(v: &Value) -> Result<&[Value]> {
    match v {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Null => {
            tracing::debug!("null in place of an array, treating as empty");
            Ok(&[])
        }
        other => Err(Error::TypeMismatch {
            expected: "array",
            found: type_name(other),
        }),
    }
}
