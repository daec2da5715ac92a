//! Object shaping: selecting, removing and transforming entries of a JSON
//! object without touching the input.

use serde_json::{Map, Value};

/// New map holding only `keys`, in the order they were requested.
///
/// Keys missing from `obj` are left out of the result. Pass a single key as
/// `["key"]`.
pub fn pick<I, K>(obj: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut out = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(v) = obj.get(key) {
            out.insert(key.to_string(), v.clone());
        }
    }
    out
}

/// New map with `keys` removed; remaining entries keep their order.
pub fn omit<I, K>(obj: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let drop: Vec<K> = keys.into_iter().collect();
    obj.iter()
        .filter(|(k, _)| !drop.iter().any(|d| d.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// New map with the same keys, each value replaced by `f(value, key, obj)`.
pub fn map_values<F>(obj: &Map<String, Value>, mut f: F) -> Map<String, Value>
where
    F: FnMut(&Value, &str, &Map<String, Value>) -> Value,
{
    obj.iter()
        .map(|(k, v)| (k.clone(), f(v, k, obj)))
        .collect()
}

/// Applies `f(value, key, obj)` to every entry in key order.
pub fn map_to_array<T, F>(obj: &Map<String, Value>, mut f: F) -> Vec<T>
where
    F: FnMut(&Value, &str, &Map<String, Value>) -> T,
{
    obj.iter().map(|(k, v)| f(v, k, obj)).collect()
}
