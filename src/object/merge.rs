// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Merging, copying and selecting properties of JSON objects.

use serde_json::Value;

use super::value::arrayify;
use super::Object;

/// Merge `sources` into a new object, left to right.
///
/// Later properties overwrite earlier ones. Values that are not objects are skipped.
///
/// # Examples
///
/// ```ignore
/// let merged = extend(&[json!({ "a": 1, "b": 1 }), json!(null), json!({ "b": 2 })]);
/// assert_eq!(Value::Object(merged), json!({ "a": 1, "b": 2 }));
/// ```
#[must_use]
pub fn extend<'a, I>(sources: I) -> Object
where
    I: IntoIterator<Item = &'a Value>,
{
    sources
        .into_iter()
        .filter_map(Value::as_object)
        .fold(Object::new(), |mut merged, source| {
            for (key, value) in source {
                merged.insert(key.clone(), value.clone());
            }
            merged
        })
}

/// Shallow copy of the properties of `value`. Non-objects yield an empty object.
#[must_use]
pub fn clone_object(value: &Value) -> Object {
    value.as_object().cloned().unwrap_or_default()
}

/// Shallow copy of `value` without the properties named in `keys`.
///
/// `keys` may be a single name or an array of names; entries that are not strings
/// are ignored.
#[must_use]
pub fn omit(value: &Value, keys: Value) -> Object {
    let mut output = clone_object(value);
    for key in arrayify(keys) {
        if let Value::String(key) = key {
            output.shift_remove(&key);
        }
    }
    output
}

/// Return the names of the properties whose value passes `predicate`.
///
/// # Examples
///
/// ```ignore
/// let object = json!({ "clive": 1, "hater": 3 });
/// let names = pluck(object.as_object().unwrap(), |value| value == &json!(1));
/// assert_eq!(names, vec!["clive"]);
/// ```
#[must_use]
pub fn pluck<F>(object: &Object, predicate: F) -> Vec<&str>
where
    F: Fn(&Value) -> bool,
{
    object
        .iter()
        .filter(|(_, value)| predicate(value))
        .map(|(key, _)| key.as_str())
        .collect()
}

/// Check if `predicate` holds for every property of `object`.
///
/// The predicate receives the value and the property name. An empty object passes.
#[must_use]
pub fn every<F>(object: &Object, predicate: F) -> bool
where
    F: Fn(&Value, &str) -> bool,
{
    object.iter().all(|(key, value)| predicate(value, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_extend_later_wins() {
        let merged = extend(&[json!({ "a": 1, "b": 1 }), json!({ "b": 2, "c": 3 })]);
        assert_eq!(Value::Object(merged), json!({ "a": 1, "b": 2, "c": 3 }));
    }

    #[test]
    fn test_extend_skips_non_objects() {
        let merged = extend(&[json!("text"), json!({ "a": 1 }), json!(null), json!([1, 2])]);
        assert_eq!(Value::Object(merged), json!({ "a": 1 }));
    }

    #[test]
    fn test_extend_does_not_modify_sources() {
        let first = json!({ "a": 1 });
        let second = json!({ "a": 2 });
        let _ = extend([&first, &second]);
        assert_eq!(first, json!({ "a": 1 }));
    }

    #[test]
    fn test_extend_nothing() {
        let sources: Vec<Value> = vec![];
        assert!(extend(&sources).is_empty());
    }

    #[test]
    fn test_clone_object() {
        let original = json!({ "a": 1, "nested": { "b": 2 } });
        let copy = clone_object(&original);
        assert_eq!(Value::Object(copy), original);
    }

    #[test]
    fn test_clone_object_non_object() {
        assert!(clone_object(&json!([1, 2])).is_empty());
        assert!(clone_object(&json!(null)).is_empty());
    }

    #[test]
    fn test_omit_single_key() {
        let output = omit(&json!({ "a": 1, "b": 2 }), json!("a"));
        assert_eq!(Value::Object(output), json!({ "b": 2 }));
    }

    #[test]
    fn test_omit_multiple_keys() {
        let output = omit(&json!({ "a": 1, "b": 2, "c": 3 }), json!(["a", "c", "missing"]));
        assert_eq!(Value::Object(output), json!({ "b": 2 }));
    }

    #[test]
    fn test_omit_preserves_order() {
        let output = omit(&json!({ "z": 1, "a": 2, "m": 3 }), json!("a"));
        let keys: Vec<&str> = output.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn test_omit_nothing() {
        let output = omit(&json!({ "a": 1 }), Value::Null);
        assert_eq!(Value::Object(output), json!({ "a": 1 }));
    }

    #[test]
    fn test_pluck() {
        let input = object(json!({ "clive": 1, "hater": 3 }));
        assert_eq!(pluck(&input, |value| value == &json!(1)), vec!["clive"]);
    }

    #[test]
    fn test_pluck_none_match() {
        let input = object(json!({ "clive": 1, "hater": 3 }));
        assert!(pluck(&input, Value::is_string).is_empty());
    }

    #[test]
    fn test_every() {
        let input = object(json!({ "one": 1, "two": 2 }));
        assert!(every(&input, |value, _| value.is_number()));
        assert!(!every(&input, |_, key| key.starts_with('o')));
    }

    #[test]
    fn test_every_empty() {
        assert!(every(&Object::new(), |_, _| false));
    }
}
