//! String normalization: URL joining, message templating and turning
//! identifiers into readable phrases.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::classify::is_numeric_str;
use crate::coerce::display_string;
use crate::options::PrettifyOptions;

/// Joins a base URL and an optional path with exactly one slash between them.
///
/// One trailing `/` is removed from `base` and from `path`, and `path` gets a
/// leading `/` if it has none. An empty `path` is treated as absent.
///
/// ```
/// use datautils::normalize_url;
/// assert_eq!(
///     normalize_url("https://api.example.com/", Some("/jobs/")),
///     "https://api.example.com/jobs"
/// );
/// ```
pub fn normalize_url(base: &str, path: Option<&str>) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let mut url = String::with_capacity(base.len() + path.map_or(0, |p| p.len() + 1));
    url.push_str(base);
    if let Some(path) = path.filter(|p| !p.is_empty()) {
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path.strip_suffix('/').unwrap_or(path));
    }
    url
}

/// Substitutes `{key}` tokens in `message` with the values from `vars`.
///
/// Only the first occurrence of each token is replaced; a second `{key}` in
/// the same message stays as written. Arrays are substituted as their
/// elements joined with `"; "`, other non-strings as their display string.
pub fn replace_placeholders(message: &str, vars: &Map<String, Value>) -> String {
    let mut out = message.to_string();
    for (key, value) in vars {
        let token = format!("{{{key}}}");
        if out.contains(&token) {
            out = out.replacen(&token, &replacement(value), 1);
        }
    }
    out
}

fn replacement(v: &Value) -> Cow<'_, str> {
    match v {
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(display_string)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => display_string(other),
    }
}

/// [`replace_placeholders`] for loosely typed input: a non-string `message`
/// or non-object `vars` returns `message` unchanged.
pub fn replace_placeholders_value(message: &Value, vars: &Value) -> Value {
    match (message, vars) {
        (Value::String(m), Value::Object(v)) => Value::String(replace_placeholders(m, v)),
        _ => message.clone(),
    }
}

/// Turns an identifier such as `collection_id`, `max-cloud-cover` or
/// `spatialExtent` into a readable phrase (`Collection id`, `Max cloud cover`,
/// `Spatial extent`).
///
/// Numeric tokens and tokens shorter than `opts.min_len` characters come back
/// unchanged. Snake case wins over kebab case, which wins over camel case;
/// only the first character of the result is uppercased.
pub fn prettify_string(input: &str, opts: &PrettifyOptions) -> String {
    if input.chars().count() < opts.min_len || is_numeric_str(input) {
        return input.to_string();
    }
    let spaced = if input.contains('_') {
        split_on(input, '_')
    } else if input.contains('-') {
        split_on(input, '-')
    } else {
        split_camel_case(input)
    };
    capitalize_first(&spaced)
}

/// Prettifies every token and joins the results with `opts.separator`.
pub fn prettify_strings<I, S>(inputs: I, opts: &PrettifyOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|s| prettify_string(s.as_ref(), opts))
        .collect::<Vec<_>>()
        .join(&opts.separator)
}

/// Prettifies a string or an array of values; anything else is coerced to its
/// display string first.
pub fn prettify_value(v: &Value, opts: &PrettifyOptions) -> String {
    match v {
        Value::Array(items) => prettify_strings(items.iter().map(display_string), opts),
        other => prettify_string(&display_string(other), opts),
    }
}

/// Replaces `sep` with a space wherever it sits between two ASCII letters or
/// digits.
fn split_on(s: &str, sep: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let between_words = c == sep
                && i > 0
                && chars[i - 1].is_ascii_alphanumeric()
                && chars.get(i + 1).is_some_and(char::is_ascii_alphanumeric);
            if between_words { ' ' } else { c }
        })
        .collect()
}

/// Inserts a space at each lowercase-to-uppercase boundary and lowercases the
/// uppercase letter unless an acronym starts there.
fn split_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let boundary = i > 0 && chars[i - 1].is_lowercase() && c.is_uppercase();
        if !boundary {
            out.push(c);
            continue;
        }
        out.push(' ');
        if chars.get(i + 1).is_some_and(|n| n.is_uppercase()) {
            out.push(c);
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_only_touches_separators_between_words() {
        assert_eq!(split_on("a_b_c", '_'), "a b c");
        assert_eq!(split_on("_private_", '_'), "_private_");
        assert_eq!(split_on("x__y", '_'), "x__y");
    }

    #[test]
    fn camel_case_keeps_acronyms() {
        assert_eq!(split_camel_case("spatialExtent"), "spatial extent");
        assert_eq!(split_camel_case("maxCloudCover"), "max cloud cover");
        assert_eq!(split_camel_case("exportSTAC"), "export STAC");
        assert_eq!(split_camel_case("URL"), "URL");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("äpfel"), "Äpfel");
    }
}
