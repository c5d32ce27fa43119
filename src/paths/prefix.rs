// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Finds the deepest directory shared by a set of file paths.

use tracing::{debug, trace};

use super::segments::{parent_dir, segments, SEPARATOR};
use super::{PathError, PathResult};

/// Return the longest prefix on which `a` and `b` agree position by position.
///
/// Comparison stops at the first mismatch, even if later positions happen to match.
/// The result borrows from `a`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(common_sequence(&[1, 2, 3, 4], &[1, 2, 5, 4]), &[1, 2]);
/// ```
#[must_use]
pub fn common_sequence<'a, T: PartialEq>(a: &'a [T], b: &[T]) -> &'a [T] {
    let len = a
        .iter()
        .zip(b.iter())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Find the deepest directory containing every file in `files`.
///
/// A single file yields its own parent directory. Files without any shared leading
/// segment, such as relative paths below different directories, yield an empty
/// string. Any other result ends with exactly one path separator.
///
/// # Errors
/// Returns `PathError::InvalidArgument` if `files` is empty.
///
/// # Examples
///
/// ```ignore
/// let dir = common_dir(&["/usr/lib/libm.so.6", "/usr/lib/x86_64/libc.so.6"])?;
/// assert_eq!(dir, "/usr/lib/");
/// ```
pub fn common_dir<S: AsRef<str>>(files: &[S]) -> PathResult<String> {
    let dirs: Vec<Vec<&str>> = files
        .iter()
        .map(|file| segments(parent_dir(file.as_ref())))
        .collect();

    let (first, rest) = dirs.split_first().ok_or(PathError::InvalidArgument {
        reason: "at least one path is required to find a common directory",
    })?;

    let common = rest.iter().fold(first.as_slice(), |common, dir| {
        let next = common_sequence(common, dir);
        trace!(depth = next.len(), dir = ?dir, "Narrowed common prefix");
        next
    });

    // The trailing empty segment adds the separator, except when nothing is shared.
    let joined = common
        .iter()
        .copied()
        .chain([""])
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    debug!(files = files.len(), common_dir = %joined, "Resolved common directory");
    Ok(joined)
}
