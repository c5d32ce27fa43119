// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Terminal output helpers: ANSI colors, platform symbols and the configuration
//! deciding how both are applied.

mod color;
mod config;
mod symbols;

pub use color::{bold, Color};
pub use config::{TerminalConfig, NO_COLOR_VARIABLE};
pub use symbols::{Platform, Symbols};
