// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Membership tests and shallow query matching over arrays of JSON values.
//!
//! A query is a non-empty JSON object. An item matches a query when the item is an
//! object and every property of the query is present on the item with an equal
//! value. Other properties of the item are not considered.

use serde_json::Value;

use super::value::arrayify;
use super::Object;

/// Check if `item` matches every property of `query`.
///
/// An empty query matches nothing.
#[must_use]
pub fn matches_query(item: &Value, query: &Object) -> bool {
    if query.is_empty() {
        return false;
    }
    item.as_object().is_some_and(|item| {
        query
            .iter()
            .all(|(key, expected)| item.get(key) == Some(expected))
    })
}

/// Check if `value` exists in `items`.
///
/// An object `value` is treated as a query and matched against each item; any other
/// value must be equal to an item. There is no type coercion, `1` and `"1"` differ.
///
/// # Examples
///
/// ```ignore
/// let items = [json!({ "result": false, "number": 1 })];
/// assert!(exists(&items, &json!({ "result": false })));
/// assert!(!exists(&[json!(1), json!(2)], &json!("1")));
/// ```
#[must_use]
pub fn exists(items: &[Value], value: &Value) -> bool {
    match value {
        Value::Object(query) => items.iter().any(|item| matches_query(item, query)),
        scalar => items.contains(scalar),
    }
}

/// Return every item matching `query`, in order.
#[must_use]
pub fn where_matches<'a>(items: &'a [Value], query: &Object) -> Vec<&'a Value> {
    items
        .iter()
        .filter(|item| matches_query(item, query))
        .collect()
}

/// Combine two arrays, adding each item of `b` that does not already exist.
///
/// All items of `a` are kept as they are. Object items of `b` are checked with
/// [`exists`], so they are skipped when an item already present matches them.
#[must_use]
pub fn union(a: &[Value], b: &[Value]) -> Vec<Value> {
    b.iter().fold(a.to_vec(), |mut output, item| {
        if !exists(&output, item) {
            output.push(item.clone());
        }
        output
    })
}

/// Return the items of `items` that do not exist in `to_remove`.
///
/// `to_remove` may be a single value or an array of values.
#[must_use]
pub fn without(items: &[Value], to_remove: Value) -> Vec<Value> {
    let to_remove = arrayify(to_remove);
    items
        .iter()
        .filter(|item| !exists(&to_remove, item))
        .cloned()
        .collect()
}

/// Return the first object whose `property` equals `value`.
#[must_use]
pub fn first<'a>(items: &'a [Value], property: &str, value: &Value) -> Option<&'a Value> {
    items
        .iter()
        .find(|item| item.get(property).is_some_and(|found| found == value))
}
