//! Binary size units and compact size formatting.

use std::fmt;

/// Bytes per kilobyte.
pub const KB: u64 = 1024;
/// Bytes per megabyte.
pub const MB: u64 = 1024 * KB;
/// Bytes per gigabyte.
pub const GB: u64 = 1024 * MB;
/// Bytes per terabyte.
pub const TB: u64 = 1024 * GB;

/// Kilobytes per megabyte.
pub const KB_PER_MB: u64 = MB / KB;
/// Kilobytes per gigabyte.
pub const KB_PER_GB: u64 = GB / KB;

/// Size unit with a binary (power of 1024) multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl SizeUnit {
    /// Bytes per one of this unit.
    pub const fn multiplier(self) -> u64 {
        match self {
            SizeUnit::Kilobytes => KB,
            SizeUnit::Megabytes => MB,
            SizeUnit::Gigabytes => GB,
            SizeUnit::Terabytes => TB,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
            SizeUnit::Terabytes => "TB",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Converts `amount` of `unit` into bytes.
pub const fn to_bytes(amount: u64, unit: SizeUnit) -> u64 {
    amount * unit.multiplier()
}

/// Converts bytes into whole kilobytes.
pub const fn to_kilobytes(bytes: u64) -> u64 {
    bytes / KB
}

/// Converts whole megabytes into kilobytes.
pub const fn mb_to_kb(megabytes: u64) -> u64 {
    megabytes * KB_PER_MB
}

/// Formats a kilobyte quantity using the largest unit that divides it exactly.
///
/// `format_size(2 * 1024 * 1024)` is `"2GB"`, `format_size(1536 * 1024)` is
/// `"1536MB"` and `format_size(2621)` is `"2621kB"`. No rounding is applied.
pub fn format_size(value_kb: u64) -> String {
    if value_kb % KB_PER_GB == 0 {
        format!("{}GB", value_kb / KB_PER_GB)
    } else if value_kb % KB_PER_MB == 0 {
        format!("{}MB", value_kb / KB_PER_MB)
    } else {
        format!("{}kB", value_kb)
    }
}
