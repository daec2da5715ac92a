#![doc = include_str!("../README.md")]

pub mod classify;
pub mod coerce;
pub mod collection;
pub mod error;
pub mod links;
pub mod object;
pub mod options;
pub mod text;

pub use crate::classify::{
    compare_string_case_insensitive, equals, is_numeric, is_object, natural_cmp,
};
pub use crate::collection::{deep_clone, deep_clone_value, size, unique, unique_value};
pub use crate::error::{Error, Result};
pub use crate::links::{Link, friendly_links, friendly_links_value};
pub use crate::object::{map_to_array, map_values, omit, pick};
pub use crate::options::{LinkOptions, PrettifyOptions};
pub use crate::text::{
    normalize_url, prettify_string, prettify_strings, prettify_value, replace_placeholders,
    replace_placeholders_value,
};
