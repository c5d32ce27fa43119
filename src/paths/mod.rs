// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Path helpers: splitting paths into segments, finding the deepest directory shared
//! by a set of files, and locating the user's home directory.

mod home;
mod prefix;
mod segments;

pub use home::{home_dir, home_dir_from, HOME_VARIABLES};
pub use prefix::{common_dir, common_sequence};
pub use segments::{file_depth, parent_dir, segments, SEPARATOR};

use thiserror::Error;

/// Result type for path operations.
pub type PathResult<T> = std::result::Result<T, PathError>;

/// Errors that can occur during path operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}
