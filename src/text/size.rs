// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats byte counts using binary (1024 based) units.

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = KILOBYTE * 1024;
const GIGABYTE: u64 = MEGABYTE * 1024;
const TERABYTE: u64 = GIGABYTE * 1024;

/// Units from largest to smallest.
const UNITS: [(u64, &str); 4] = [
    (TERABYTE, "TB"),
    (GIGABYTE, "GB"),
    (MEGABYTE, "MB"),
    (KILOBYTE, "KB"),
];

/// Format `bytes` as a human readable size with `precision` decimals.
///
/// Sizes below one kilobyte are printed as whole bytes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(bytes_to_size(512, 2), "512 B");
/// assert_eq!(bytes_to_size(1024, 1), "1.0 KB");
/// ```
#[must_use]
pub fn bytes_to_size(bytes: u64, precision: usize) -> String {
    UNITS
        .iter()
        .find(|(size, _)| bytes >= *size)
        .map_or_else(
            || format!("{bytes} B"),
            |(size, unit)| {
                #[allow(clippy::cast_precision_loss)]
                let value = bytes as f64 / *size as f64;
                format!("{value:.precision$} {unit}")
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(bytes_to_size(0, 2), "0 B");
        assert_eq!(bytes_to_size(1023, 2), "1023 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(bytes_to_size(1024, 1), "1.0 KB");
        assert_eq!(bytes_to_size(1536, 2), "1.50 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(bytes_to_size(MEGABYTE, 0), "1 MB");
        assert_eq!(bytes_to_size(5 * MEGABYTE + MEGABYTE / 4, 2), "5.25 MB");
    }

    #[test]
    fn test_gigabytes() {
        assert_eq!(bytes_to_size(3 * GIGABYTE, 1), "3.0 GB");
    }

    #[test]
    fn test_terabytes() {
        assert_eq!(bytes_to_size(TERABYTE, 3), "1.000 TB");
        assert_eq!(bytes_to_size(2048 * TERABYTE, 0), "2048 TB");
    }
}
