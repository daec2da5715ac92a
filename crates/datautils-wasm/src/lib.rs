use datautils::{LinkOptions, PrettifyOptions};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(feature = "size_opt")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Maximum input size in bytes (10 MB)
const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn parse_json(json_str: &str) -> Result<Value, String> {
    if json_str.len() > MAX_INPUT_SIZE {
        return Err(format!(
            "Input exceeds maximum size limit of {} bytes",
            MAX_INPUT_SIZE
        ));
    }
    serde_json::from_str(json_str).map_err(|e| format!("Invalid JSON: {}", e))
}

fn link_options(sort: bool) -> LinkOptions {
    LinkOptions {
        sort,
        ..LinkOptions::default()
    }
}

/// Curate a JSON array of links and return it as a JSON string
#[wasm_bindgen]
pub fn friendly_links(json_str: &str, sort: bool) -> Result<String, String> {
    let value = parse_json(json_str)?;
    let links = datautils::friendly_links_value(&value, &link_options(sort))
        .map_err(|e| format!("Invalid links: {}", e))?;
    serde_json::to_string(&links).map_err(|e| format!("JSON encoding error: {}", e))
}

/// Curate a links array passed as a JS value, returning a JS array of plain
/// objects (`{href, rel, title, ...}`)
#[wasm_bindgen(js_name = friendlyLinks)]
pub fn friendly_links_js(links: JsValue, sort: bool) -> Result<JsValue, JsValue> {
    let value: Value = serde_wasm_bindgen::from_value(links)?;
    let curated = datautils::friendly_links_value(&value, &link_options(sort))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    // Link flattens its extra keys, so it serializes as a map; emit objects, not JS Maps.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(curated.serialize(&serializer)?)
}

/// Turn an identifier into a readable phrase
#[wasm_bindgen]
pub fn prettify(token: &str) -> String {
    datautils::prettify_string(token, &PrettifyOptions::default())
}

#[wasm_bindgen]
pub fn normalize_url(base: &str, path: Option<String>) -> String {
    datautils::normalize_url(base, path.as_deref())
}

/// Fill `{name}` placeholders from a JSON object; other JSON leaves the
/// message unchanged
#[wasm_bindgen]
pub fn replace_placeholders(message: &str, vars_json: &str) -> Result<String, String> {
    let vars = parse_json(vars_json)?;
    match datautils::replace_placeholders_value(&Value::String(message.to_string()), &vars) {
        Value::String(s) => Ok(s),
        _ => Ok(message.to_string()),
    }
}

/// Deduplicate a JSON array and return it as a JSON string
#[wasm_bindgen]
pub fn unique(json_str: &str, deep: bool) -> Result<String, String> {
    let value = parse_json(json_str)?;
    let out = datautils::unique_value(&value, deep).map_err(|e| e.to_string())?;
    serde_json::to_string(&out).map_err(|e| format!("JSON encoding error: {}", e))
}

/// Natural, case-insensitive comparison usable as an `Array.prototype.sort` callback
#[wasm_bindgen]
pub fn compare_natural(a: &str, b: &str) -> i32 {
    datautils::natural_cmp(a, b) as i32
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_links() {
        let json = r#"[{"href": "https://x.org/a", "rel": "self"}, {"href": "https://x.org/b", "rel": "license"}]"#;
        let out = friendly_links(json, true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"href": "https://x.org/b", "rel": "license", "title": "License"}])
        );
    }

    #[test]
    fn test_friendly_links_rejects_objects() {
        let err = friendly_links(r#"{"href": "x"}"#, true).unwrap_err();
        assert!(err.contains("expected array, found object"));
    }

    #[test]
    fn test_prettify_and_urls() {
        assert_eq!(prettify("collection_id"), "Collection id");
        assert_eq!(
            normalize_url("https://api.example.com/", Some("jobs/".into())),
            "https://api.example.com/jobs"
        );
        assert_eq!(normalize_url("https://api.example.com/", None), "https://api.example.com");
    }

    #[test]
    fn test_replace_placeholders() {
        assert_eq!(
            replace_placeholders("Error in {field}", r#"{"field": "bands"}"#).unwrap(),
            "Error in bands"
        );
        assert_eq!(
            replace_placeholders("Error in {field}", "[1]").unwrap(),
            "Error in {field}"
        );
    }

    #[test]
    fn test_unique_and_compare() {
        assert_eq!(unique("[1, 1, 2]", false).unwrap(), "[1,2]");
        assert!(compare_natural("item2", "item10") < 0);
        assert_eq!(compare_natural("A", "a"), 0);
    }

    #[test]
    fn test_size_limit() {
        let large_json = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = unique(&large_json, false);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .contains("Input exceeds maximum size limit")
        );
    }
}
