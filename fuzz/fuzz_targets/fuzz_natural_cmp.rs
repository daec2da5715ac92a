#![no_main]
use std::cmp::Ordering;

use datautils::natural_cmp;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String, String)| {
    let (a, b, c) = input;

    assert_eq!(natural_cmp(&a, &a), Ordering::Equal);
    assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse(), "antisymmetry: {a:?} {b:?}");

    let mut v = vec![a, b, c];
    v.sort_by(|x, y| natural_cmp(x, y));
    for w in v.windows(2) {
        assert_ne!(natural_cmp(&w[0], &w[1]), Ordering::Greater, "unsorted: {v:?}");
    }
});
