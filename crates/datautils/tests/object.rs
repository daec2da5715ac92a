use datautils::{map_to_array, map_values, omit, pick};
use serde_json::{Map, Value, json};

fn sample() -> Map<String, Value> {
    match json!({"id": "s2", "title": "Sentinel-2", "extent": {"spatial": [0, 1]}, "links": []}) {
        Value::Object(m) => m,
        _ => unreachable!(),
    }
}

#[test]
fn pick_keeps_requested_keys_in_request_order() {
    let obj = sample();
    let picked = pick(&obj, ["title", "id"]);
    let keys: Vec<&str> = picked.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "id"]);
    assert_eq!(picked["id"], json!("s2"));
}

#[test]
fn pick_single_key_and_missing_keys() {
    let obj = sample();
    assert_eq!(Value::Object(pick(&obj, ["id"])), json!({"id": "s2"}));
    let picked = pick(&obj, vec![String::from("id"), String::from("nope")]);
    assert_eq!(picked.len(), 1);
    assert!(!picked.contains_key("nope"));
}

#[test]
fn pick_leaves_input_untouched() {
    let obj = sample();
    let before = obj.clone();
    let mut picked = pick(&obj, ["extent"]);
    picked.insert("extra".into(), json!(1));
    assert_eq!(obj, before);
}

#[test]
fn omit_removes_keys_and_keeps_order() {
    let obj = sample();
    let rest = omit(&obj, ["title", "links"]);
    let keys: Vec<&str> = rest.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "extent"]);
    assert_eq!(omit(&obj, Vec::<&str>::new()).len(), obj.len());
}

#[test]
fn map_values_passes_key_and_object() {
    let obj = sample();
    let mapped = map_values(&obj, |v, k, whole| {
        assert!(whole.contains_key(k));
        json!(format!("{k}:{}", v.is_string()))
    });
    assert_eq!(
        Value::Object(mapped),
        json!({"id": "id:true", "title": "title:true", "extent": "extent:false", "links": "links:false"})
    );
}

#[test]
fn map_to_array_follows_key_order() {
    let obj = sample();
    let keys = map_to_array(&obj, |_, k, _| k.to_string());
    assert_eq!(keys, vec!["id", "title", "extent", "links"]);
    let sizes = map_to_array(&obj, |v, _, _| datautils::size(v));
    assert_eq!(sizes, vec![0, 0, 1, 0]);
}
