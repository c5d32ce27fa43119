// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Small, stateless utility functions.
//!
//! This crate provides:
//! - Path helpers, most notably finding the deepest directory shared by a set of files
//! - Merging, copying and querying dynamic JSON objects and arrays
//! - String formatting: padding, byte sizes, regex and JSON escaping
//! - Terminal styling with platform aware tick/cross symbols

pub mod object;
pub mod paths;
pub mod terminal;
pub mod text;

// Re-export key functions for convenience
pub use object::{exists, extend, omit, pluck, union, where_matches, without, Object};
pub use paths::{common_dir, common_sequence, home_dir, PathError, PathResult};
pub use terminal::{Color, Platform, Symbols, TerminalConfig};
pub use text::{bytes_to_size, escape_json_string, escape_reg_exp, pad_right};
