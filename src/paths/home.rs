// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Locates the current user's home directory.

use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variables consulted for the home directory, in order.
pub const HOME_VARIABLES: [&str; 3] = ["HOME", "HOMEPATH", "USERPROFILE"];

/// Return the current user's home directory.
///
/// The first non-empty variable of [`HOME_VARIABLES`] wins. If none is set, the
/// platform lookup of the `dirs` crate is used.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    home_dir_from(|name| env::var(name).ok()).or_else(|| {
        let home = dirs::home_dir();
        debug!(home = ?home, "No home variable set, using platform lookup");
        home
    })
}

/// Resolve the home directory from the variables returned by `lookup`.
pub fn home_dir_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    HOME_VARIABLES.iter().find_map(|name| {
        lookup(name).filter(|value| !value.is_empty()).map(|value| {
            debug!(variable = *name, home = %value, "Resolved home directory");
            PathBuf::from(value)
        })
    })
}
