use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four numeral bases the converter supports.
///
/// Radix values never travel as free integers inside the crate; the numeric
/// form (2/8/10/16) only appears at the serde and CLI boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

/// Error for radix strings outside {2, 8, 10, 16, bin, oct, dec, hex}
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported base '{0}' (expected 2, 8, 10, 16, bin, oct, dec or hex)")]
pub struct RadixParseError(String);

impl Radix {
    /// All variants in display order (matches the dropdown order of the UI)
    pub const ALL: [Radix; 4] = [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hexadecimal];

    /// Numeric base value
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// Short badge name shown next to values (BIN/OCT/DEC/HEX)
    pub fn short_name(self) -> &'static str {
        match self {
            Radix::Binary => "BIN",
            Radix::Octal => "OCT",
            Radix::Decimal => "DEC",
            Radix::Hexadecimal => "HEX",
        }
    }

    /// Digit cluster width for display grouping; decimal is not grouped
    pub fn group_size(self) -> Option<usize> {
        match self {
            Radix::Binary | Radix::Hexadecimal => Some(4),
            Radix::Octal => Some(3),
            Radix::Decimal => None,
        }
    }

    /// Next base in display order, wrapping around (used by the TUI selectors)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (base {})", self.short_name(), self.value())
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> u32 {
        radix.value()
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::from_value(value).ok_or_else(|| RadixParseError(value.to_string()))
    }
}

impl FromStr for Radix {
    type Err = RadixParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2" | "bin" | "binary" => Ok(Radix::Binary),
            "8" | "oct" | "octal" => Ok(Radix::Octal),
            "10" | "dec" | "decimal" => Ok(Radix::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Radix::Hexadecimal),
            _ => Err(RadixParseError(s.to_string())),
        }
    }
}
