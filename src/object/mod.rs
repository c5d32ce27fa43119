// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Helpers for dynamic JSON objects and arrays: merging, cloning, key selection,
//! membership tests and query matching.

mod merge;
mod query;
mod value;

pub use merge::{clone_object, every, extend, omit, pluck};
pub use query::{exists, first, matches_query, union, where_matches, without};
pub use value::{arrayify, is_number, is_plain_object};

/// A JSON object, keyed by property name in insertion order.
pub type Object = serde_json::Map<String, serde_json::Value>;
