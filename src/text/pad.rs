// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

/// Pattern used when no padding pattern is given.
const DEFAULT_PAD: &str = " ";

/// Build a string of `len` characters by repeating `pattern`.
///
/// The pattern is cut off where the length is reached. An empty pattern is treated
/// as a single space.
#[must_use]
pub fn fill(pattern: &str, len: usize) -> String {
    let pattern = if pattern.is_empty() {
        DEFAULT_PAD
    } else {
        pattern
    };
    pattern.chars().cycle().take(len).collect()
}

/// Pad `input` on the right to `width` characters.
///
/// Input that is already `width` characters or longer is returned unchanged.
#[must_use]
pub fn pad_right(input: &str, width: usize, pad_with: Option<&str>) -> String {
    let len = input.chars().count();
    if len >= width {
        return input.to_string();
    }
    format!("{input}{}", fill(pad_with.unwrap_or(DEFAULT_PAD), width - len))
}
