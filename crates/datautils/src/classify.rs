//! Value classification and comparison primitives.

use core::cmp::Ordering;

use serde_json::{Number, Value};

use crate::coerce::display_string;

/// True iff `v` is a JSON object. Arrays, null and scalars are not objects.
pub fn is_object(v: &Value) -> bool {
    matches!(v, Value::Object(_))
}

/// Structural equality over arbitrarily nested values.
///
/// Numbers compare by numeric value, so `1` and `1.0` are equal; an integer
/// only equals a float that holds exactly the same integral value. Arrays must
/// match element by element in order; objects must have the same key set with
/// equal values regardless of key order.
pub fn equals(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(l, r)| equals(l, r))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, l)| b.get(k).is_some_and(|r| equals(l, r)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    NumberKey::of(a) == NumberKey::of(b)
}

/// Identity of a JSON number. Integers and integral floats share the `Int`
/// form, so `1`, `1.0` and `-0.0`/`0` coincide while integers beyond 2^53
/// stay distinct from nearby floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NumberKey {
    Int(i128),
    Float(u64),
}

impl NumberKey {
    pub(crate) fn of(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            return NumberKey::Int(i.into());
        }
        if let Some(u) = n.as_u64() {
            return NumberKey::Int(u.into());
        }
        let f = n.as_f64().unwrap_or(0.0);
        if f.fract() == 0.0 && f >= i128::MIN as f64 && f < i128::MAX as f64 {
            NumberKey::Int(f as i128)
        } else {
            NumberKey::Float(f.to_bits())
        }
    }
}

/// True iff `v` is a number, or a string whose trimmed content parses in full
/// as a finite number.
///
/// `"NaN"`, `"Infinity"`, empty strings, booleans, null and containers are
/// never numeric.
pub fn is_numeric(v: &Value) -> bool {
    match v {
        Value::Number(_) => true,
        Value::String(s) => is_numeric_str(s),
        _ => false,
    }
}

pub(crate) fn is_numeric_str(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Case-insensitive natural ordering of two values.
///
/// Non-string values are compared by their display string (see
/// [`display_string`]).
pub fn compare_string_case_insensitive(a: &Value, b: &Value) -> Ordering {
    natural_cmp(&display_string(a), &display_string(b))
}

/// Case-insensitive natural ordering of two strings: runs of ASCII digits
/// compare by numeric magnitude, everything else compares by lowercased
/// characters. `"item2"` sorts before `"item10"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = compare_runs(l, r);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_runs(l: &str, r: &str) -> Ordering {
    if is_digit_run(l) && is_digit_run(r) {
        let l = l.trim_start_matches('0');
        let r = r.trim_start_matches('0');
        // Equal-length digit strings order lexicographically as numbers do.
        return l.len().cmp(&r.len()).then_with(|| l.cmp(r));
    }
    l.chars()
        .flat_map(char::to_lowercase)
        .cmp(r.chars().flat_map(char::to_lowercase))
}

fn is_digit_run(s: &str) -> bool {
    s.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Splits a string into alternating runs of ASCII digits and non-digits.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = *self.rest.as_bytes().first()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(run)
    }
}
