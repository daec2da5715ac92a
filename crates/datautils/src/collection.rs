//! Collection helpers: deduplication, sizing and deep copies.

use std::collections::HashSet;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::classify::{NumberKey, equals};
use crate::coerce::array_or_empty;
use crate::error::Result;

/// Hash key for scalar values in shallow deduplication.
#[derive(Debug, PartialEq, Eq, Hash)]
enum PrimitiveKey<'a> {
    Null,
    Bool(bool),
    Number(NumberKey),
    String(&'a str),
}

impl<'a> PrimitiveKey<'a> {
    /// Composite values have no primitive key.
    fn of(v: &'a Value) -> Option<Self> {
        match v {
            Value::Null => Some(PrimitiveKey::Null),
            Value::Bool(b) => Some(PrimitiveKey::Bool(*b)),
            Value::Number(n) => Some(PrimitiveKey::Number(NumberKey::of(n))),
            Value::String(s) => Some(PrimitiveKey::String(s.as_str())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// Without `use_deep_equals`, scalars are deduplicated by value (numbers the
/// same way [`equals`] compares them) and every array or object counts as
/// distinct. With it, duplicates are found with [`equals`], which is what
/// composite values need.
pub fn unique(seq: &[Value], use_deep_equals: bool) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(seq.len());
    if use_deep_equals {
        for item in seq {
            if !out.iter().any(|seen| equals(seen, item)) {
                out.push(item.clone());
            }
        }
    } else {
        let mut seen = HashSet::with_capacity(seq.len());
        for item in seq {
            let fresh = match PrimitiveKey::of(item) {
                Some(key) => seen.insert(key),
                None => true,
            };
            if fresh {
                out.push(item.clone());
            }
        }
    }
    tracing::trace!(input = seq.len(), output = out.len(), deep = use_deep_equals, "unique");
    out
}

/// [`unique`] over an array value. `null` yields an empty vector; any other
/// non-array type is an error.
pub fn unique_value(v: &Value, use_deep_equals: bool) -> Result<Vec<Value>> {
    Ok(unique(array_or_empty(v)?, use_deep_equals))
}

/// Element count of an array, key count of an object, `0` for anything else.
pub fn size(v: &Value) -> usize {
    match v {
        Value::Array(a) => a.len(),
        Value::Object(m) => m.len(),
        _ => 0,
    }
}

/// Independent deep copy made by a round trip through JSON.
///
/// Only data with a JSON representation survives; a value serde_json cannot
/// express (e.g. a map with non-string keys) fails here.
pub fn deep_clone<T: Serialize + DeserializeOwned>(v: &T) -> Result<T> {
    let json = serde_json::to_value(v)?;
    Ok(serde_json::from_value(json)?)
}

/// Deep copy of a value already in JSON form.
pub fn deep_clone_value(v: &Value) -> Value {
    v.clone()
}
