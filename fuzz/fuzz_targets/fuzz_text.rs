#![no_main]
use datautils::{PrettifyOptions, normalize_url, prettify_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, Option<String>)| {
    let (base, path) = input;

    let url = normalize_url(&base, path.as_deref());
    // Only one slash is stripped per call; a leftover trailing slash goes on the next.
    if !url.ends_with('/') {
        assert_eq!(normalize_url(&url, None), url, "normalize_url not idempotent: {base:?} {path:?}");
    }

    let opts = PrettifyOptions::default();
    let pretty = prettify_string(&base, &opts);
    if base.chars().count() < opts.min_len {
        assert_eq!(pretty, base);
    }
});
