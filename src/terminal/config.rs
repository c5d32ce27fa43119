// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Resolves how terminal output is styled, either from the environment or from a
//! JSON configuration file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::color::{bold, Color};
use super::symbols::{Platform, Symbols};

/// Environment variable disabling colored output when set to a non-empty value.
pub const NO_COLOR_VARIABLE: &str = "NO_COLOR";

/// Terminal styling, resolved once and passed to whatever prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalConfig {
    platform: Platform,
    color: bool,
    symbols: Symbols,
}

/// On-disk form of the configuration. Missing fields fall back to the platform
/// defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TerminalConfigFile {
    platform: Option<Platform>,
    color: Option<bool>,
    symbols: Option<Symbols>,
}

impl TerminalConfig {
    /// Create a configuration for `platform` using its default symbols.
    #[must_use]
    pub fn new(platform: Platform, color: bool) -> Self {
        Self {
            platform,
            color,
            symbols: Symbols::for_platform(platform),
        }
    }

    /// Detect the configuration of the current process.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(Platform::current(), |name| env::var(name).ok())
    }

    /// Detect the configuration for `platform` from the variables returned by `lookup`.
    pub fn detect_from<F>(platform: Platform, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = lookup(NO_COLOR_VARIABLE).is_none_or(|value| value.is_empty());
        debug!(platform = ?platform, color, "Detected terminal configuration");
        Self::new(platform, color)
    }

    /// Load the configuration from a JSON file.
    ///
    /// All fields are optional: `platform` defaults to the current platform, `color`
    /// to enabled and `symbols` to the defaults of the configured platform.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read terminal config file: {}",
                path.as_ref().display()
            )
        })?;
        let file: TerminalConfigFile = serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse terminal config file: {}",
                path.as_ref().display()
            )
        })?;

        let platform = file.platform.unwrap_or_else(Platform::current);
        let config = Self {
            platform,
            color: file.color.unwrap_or(true),
            symbols: file
                .symbols
                .unwrap_or_else(|| Symbols::for_platform(platform)),
        };
        debug!(path = %path.as_ref().display(), config = ?config, "Loaded terminal configuration");
        Ok(config)
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn color(&self) -> bool {
        self.color
    }

    #[must_use]
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Paint `text` in `color` if colored output is enabled.
    #[must_use]
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.color {
            color.paint(text)
        } else {
            text.to_string()
        }
    }

    /// Make `text` bold if colored output is enabled.
    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            bold(text)
        } else {
            text.to_string()
        }
    }

    /// Format a status line, prefixed with a green tick or a red cross.
    #[must_use]
    pub fn status(&self, ok: bool, message: &str) -> String {
        let symbol = if ok {
            self.paint(Color::Green, &self.symbols.tick)
        } else {
            self.paint(Color::Red, &self.symbols.cross)
        };
        format!("{symbol} {message}")
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self::new(Platform::current(), true)
    }
}
