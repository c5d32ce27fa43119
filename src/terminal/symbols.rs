// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Tick and cross symbols for the platforms' default terminal fonts.

use serde::{Deserialize, Serialize};

/// Platform family, as far as terminal output is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Symbols marking success and failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub tick: String,
    pub cross: String,
}

impl Symbols {
    /// Symbols that render with the default fonts of `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let (tick, cross) = match platform {
            Platform::Windows => ("\u{221A}", "\u{00D7}"),
            Platform::Unix => ("\u{2714}\u{FE0E}", "\u{2716}"),
        };
        Self {
            tick: tick.to_string(),
            cross: cross.to_string(),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_symbols() {
        let symbols = Symbols::for_platform(Platform::Windows);
        assert_eq!(symbols.tick, "√");
        assert_eq!(symbols.cross, "×");
    }

    #[test]
    fn test_unix_symbols() {
        let symbols = Symbols::for_platform(Platform::Unix);
        assert_eq!(symbols.tick, "\u{2714}\u{FE0E}");
        assert_eq!(symbols.cross, "\u{2716}");
    }

    #[test]
    fn test_default_follows_current_platform() {
        assert_eq!(
            Symbols::default(),
            Symbols::for_platform(Platform::current())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_current_platform() {
        assert_eq!(Platform::current(), Platform::Unix);
    }
}
