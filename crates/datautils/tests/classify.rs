use std::cmp::Ordering;

use datautils::{compare_string_case_insensitive, equals, is_numeric, is_object, natural_cmp};
use serde_json::json;

#[test]
fn is_object_excludes_arrays_and_null() {
    assert!(is_object(&json!({})));
    assert!(is_object(&json!({"a": 1})));
    assert!(!is_object(&json!([])));
    assert!(!is_object(&json!(null)));
    assert!(!is_object(&json!("{}")));
    assert!(!is_object(&json!(3)));
}

#[test]
fn equals_is_reflexive_and_symmetric() {
    let samples = [
        json!(null),
        json!(true),
        json!(1.25),
        json!("s"),
        json!([1, [2, {"a": null}]]),
        json!({"x": {"y": [1, 2]}, "z": false}),
    ];
    for a in &samples {
        assert!(equals(a, a));
        for b in &samples {
            assert_eq!(equals(a, b), equals(b, a));
        }
    }
}

#[test]
fn equals_ignores_object_key_order() {
    let a = json!({"a": 1, "b": {"c": 2, "d": 3}});
    let b = json!({"b": {"d": 3, "c": 2}, "a": 1});
    assert!(equals(&a, &b));
}

#[test]
fn equals_respects_array_order_and_length() {
    assert!(!equals(&json!([1, 2]), &json!([2, 1])));
    assert!(!equals(&json!([1, 2]), &json!([1, 2, 3])));
    assert!(!equals(&json!({"a": 1}), &json!({"a": 1, "b": null})));
}

#[test]
fn equals_compares_numbers_by_value() {
    assert!(equals(&json!(1), &json!(1.0)));
    assert!(equals(&json!([0]), &json!([-0.0])));
    assert!(!equals(&json!(1), &json!("1")));
    assert!(!equals(&json!(null), &json!(false)));
}

#[test]
fn equals_is_transitive_across_integers_and_floats() {
    let above = json!(9007199254740993u64);
    let float = json!(9007199254740992.0);
    let exact = json!(9007199254740992u64);
    assert!(equals(&float, &exact));
    assert!(!equals(&above, &float));
    assert!(!equals(&above, &exact));
    assert!(equals(&json!(i64::MIN), &json!(i64::MIN as f64)));
    assert!(!equals(&json!(u64::MAX), &json!(i64::MAX)));
}

#[test]
fn is_numeric_cases() {
    assert!(is_numeric(&json!(42)));
    assert!(is_numeric(&json!(-0.5)));
    assert!(is_numeric(&json!("42")));
    assert!(is_numeric(&json!("3.14")));
    assert!(is_numeric(&json!("1e3")));
    assert!(!is_numeric(&json!("NaN")));
    assert!(!is_numeric(&json!("Infinity")));
    assert!(!is_numeric(&json!("-Infinity")));
    assert!(!is_numeric(&json!("abc")));
    assert!(!is_numeric(&json!("")));
    assert!(!is_numeric(&json!(true)));
    assert!(!is_numeric(&json!(null)));
    assert!(!is_numeric(&json!([1])));
}

#[test]
fn natural_order_beats_lexical_order() {
    assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
    assert_eq!("item2".cmp("item10"), Ordering::Greater);
    assert_eq!(natural_cmp("item10", "item2"), Ordering::Greater);
}

#[test]
fn natural_order_is_case_insensitive() {
    assert_eq!(natural_cmp("Band", "band"), Ordering::Equal);
    assert_eq!(natural_cmp("alpha", "Beta"), Ordering::Less);
    assert_eq!(natural_cmp("B10", "b9"), Ordering::Greater);
}

#[test]
fn natural_order_prefix_sorts_first() {
    assert_eq!(natural_cmp("", "a"), Ordering::Less);
    assert_eq!(natural_cmp("file", "file1"), Ordering::Less);
    assert_eq!(natural_cmp("v1.2", "v1.10"), Ordering::Less);
}

#[test]
fn compare_values_coerces_non_strings() {
    assert_eq!(
        compare_string_case_insensitive(&json!(2), &json!(10)),
        Ordering::Less
    );
    assert_eq!(
        compare_string_case_insensitive(&json!("Item2"), &json!("item10")),
        Ordering::Less
    );
    assert_eq!(
        compare_string_case_insensitive(&json!(null), &json!("NULL")),
        Ordering::Equal
    );
    assert_eq!(
        compare_string_case_insensitive(&json!(true), &json!("true")),
        Ordering::Equal
    );
}

#[test]
fn sorting_with_natural_cmp() {
    let mut names = vec!["item10", "Item1", "item2", "alpha", "Zeta"];
    names.sort_by(|a, b| natural_cmp(a, b));
    assert_eq!(names, vec!["alpha", "Item1", "item2", "item10", "Zeta"]);
}
