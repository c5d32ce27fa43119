// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! String formatting: padding, human readable byte sizes and escaping.

mod escape;
mod pad;
mod size;

pub use escape::{escape_json_string, escape_reg_exp};
pub use pad::{fill, pad_right};
pub use size::bytes_to_size;
