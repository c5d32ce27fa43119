// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use serde::{Deserialize, Serialize};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Foreground colors of the basic ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// The SGR parameter selecting this foreground color.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// Wrap `text` in this color, resetting all attributes afterwards.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}{RESET}", self.code())
    }
}

/// Wrap `text` in bold, resetting all attributes afterwards.
#[must_use]
pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}
