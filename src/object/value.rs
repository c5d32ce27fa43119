// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Type predicates and conversions for single JSON values.

use serde_json::Value;

/// Check if a value is a JSON object (not an array, not `null`).
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// Check if a value is numeric.
///
/// JSON numbers are always numeric. Strings are numeric when their trimmed text
/// parses as a finite number, so `"42"` and `" 1.5e3 "` pass but `"12px"`,
/// `"NaN"` and `""` do not.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .is_ok_and(f64::is_finite),
        _ => false,
    }
}

/// Wrap a value into an array.
///
/// - `null` becomes an empty array
/// - an array is returned as its elements
/// - any other value becomes a one-element array
#[must_use]
pub fn arrayify(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}
