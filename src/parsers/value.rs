//! Typed accessors over an untyped [`plist::Value`] tree.
//!
//! Every accessor returns `None` instead of failing, so lookups compose with `?`
//! and `and_then` without nested matching.

use chrono::{DateTime, Utc};
use plist::{Dictionary, Value};

use super::deserializers::timestamp_from_value;

/// Look up `key` and require it to be a dictionary
pub fn get_dict<'a>(dict: &'a Dictionary, key: &str) -> Option<&'a Dictionary> {
    dict.get(key)?.as_dictionary()
}

/// Look up `key` and require it to be a string
pub fn get_string<'a>(dict: &'a Dictionary, key: &str) -> Option<&'a str> {
    dict.get(key)?.as_string()
}

/// Look up `key` and require it to be an array made only of strings
pub fn get_string_array<'a>(dict: &'a Dictionary, key: &str) -> Option<Vec<&'a str>> {
    dict.get(key)?.as_array()?.iter().map(Value::as_string).collect()
}

/// Look up `key` and decode it as a point in time
pub fn get_date(dict: &Dictionary, key: &str) -> Option<DateTime<Utc>> {
    timestamp_from_value(dict.get(key)?)
}

/// Walk a chain of dictionary keys from `root`
pub fn get_path<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Dictionary> {
    keys.iter().try_fold(root.as_dictionary()?, |dict, key| get_dict(dict, key))
}
