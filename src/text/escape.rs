// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Escapes text for embedding in regular expressions and JSON strings.

use serde_json::Value;

/// Characters with a special meaning in regular expressions.
const REG_EXP_SPECIAL: &[char] = &[
    '.', '*', '+', '?', '^', '=', '!', ':', '$', '{', '}', '(', ')', '|', '[', ']', '/', '\\',
];

/// Escape regular expression special characters with a backslash.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_reg_exp("(.*)"), "\\(\\.\\*\\)");
/// ```
#[must_use]
pub fn escape_reg_exp(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if REG_EXP_SPECIAL.contains(&c) {
            output.push('\\');
        }
        output.push(c);
    }
    output
}

/// Escape `text` as the body of a JSON string literal, without the quotes.
#[must_use]
pub fn escape_json_string(text: &str) -> String {
    let quoted = Value::String(text.to_string()).to_string();
    // Serialization always wraps the body in a pair of ASCII quotes.
    quoted[1..quoted.len() - 1].to_string()
}
