#![no_main]
use std::cmp::Ordering;

use datautils::{LinkOptions, friendly_links_value, natural_cmp};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else { return };
    let Ok(links) = friendly_links_value(&value, &LinkOptions::default()) else { return };

    for link in &links {
        assert!(link.title.is_some(), "link without title: {link:?}");
        assert!(!link.rel.as_deref().is_some_and(|r| r.to_lowercase() == "self"));
    }
    for w in links.windows(2) {
        let (a, b) = (w[0].title.as_deref().unwrap_or(""), w[1].title.as_deref().unwrap_or(""));
        assert_ne!(natural_cmp(a, b), Ordering::Greater, "unsorted titles: {a:?} {b:?}");
    }
});
