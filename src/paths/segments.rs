// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Splits path strings into segments on the platform separator.

use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// The platform path separator used for splitting and joining.
pub const SEPARATOR: &str = MAIN_SEPARATOR_STR;

/// Directory name of a path without a parent component.
const CURRENT_DIR: &str = ".";

/// Return the parent directory of `path`.
///
/// A bare file name has the parent `.`, and the root is its own parent.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parent_dir("/usr/lib/libm.so.6"), "/usr/lib");
/// assert_eq!(parent_dir("libm.so.6"), ".");
/// ```
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    match Path::new(path).parent().map(Path::to_str) {
        Some(Some("")) => CURRENT_DIR,
        Some(Some(parent)) => parent,
        // Only the root (or an empty string) has no parent.
        _ if path.is_empty() => CURRENT_DIR,
        _ => path,
    }
}

/// Split a directory into its segments.
///
/// Trailing separators are ignored, so an absolute path keeps its empty leading
/// segment and the root alone yields a single empty segment.
#[must_use]
pub fn segments(dir: &str) -> Vec<&str> {
    dir.trim_end_matches(MAIN_SEPARATOR).split(MAIN_SEPARATOR).collect()
}

/// Count the segments of `path` when split on the platform separator.
#[must_use]
pub fn file_depth(path: &str) -> usize {
    path.split(MAIN_SEPARATOR).count()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dir_absolute() {
        assert_eq!(parent_dir("/usr/lib/libm.so.6"), "/usr/lib");
        assert_eq!(
            parent_dir("/Users/Lloyd/Documents/Kunai/renamer"),
            "/Users/Lloyd/Documents/Kunai"
        );
    }

    #[test]
    fn test_parent_dir_top_level_file() {
        assert_eq!(parent_dir("/libm.so.6"), "/");
    }

    #[test]
    fn test_parent_dir_root() {
        assert_eq!(parent_dir("/"), "/");
    }

    #[test]
    fn test_parent_dir_bare_name() {
        assert_eq!(parent_dir("libm.so.6"), ".");
        assert_eq!(parent_dir(""), ".");
    }

    #[test]
    fn test_parent_dir_relative() {
        assert_eq!(parent_dir("usr/lib/libm.so.6"), "usr/lib");
    }

    #[test]
    fn test_segments_absolute() {
        assert_eq!(segments("/usr/lib"), vec!["", "usr", "lib"]);
    }

    #[test]
    fn test_segments_root() {
        assert_eq!(segments("/"), vec![""]);
    }

    #[test]
    fn test_segments_trailing_separator() {
        assert_eq!(segments("/usr/lib/"), vec!["", "usr", "lib"]);
    }

    #[test]
    fn test_segments_relative() {
        assert_eq!(segments("usr/lib"), vec!["usr", "lib"]);
        assert_eq!(segments("."), vec!["."]);
    }

    #[test]
    fn test_file_depth() {
        assert_eq!(file_depth("/usr/lib/libm.so.6"), 4);
        assert_eq!(file_depth("libm.so.6"), 1);
        assert_eq!(file_depth("/"), 2);
    }
}
