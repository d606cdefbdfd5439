use crate::models::{ConversionResult, Radix};

use super::format::format_digits;
use super::validate::validate;

/// Conversion failures. Both leave no partial state behind: a failed
/// conversion produces no `ConversionResult` at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A character falls outside the claimed base's alphabet, or the input
    /// was empty where a value was required.
    #[error("invalid character for {0}")]
    InvalidDigits(Radix),
    /// The digits are well-formed but the value exceeds the supported range
    #[error("value exceeds the supported range (maximum {max})", max = u64::MAX)]
    OutOfRange,
}

/// Parse `input` as an unsigned integer in `from`, re-render it in `to`,
/// and attach the grouped display form.
pub fn convert(input: &str, from: Radix, to: Radix) -> Result<ConversionResult, ConvertError> {
    let value = parse_digits(input, from)?;
    let raw_digits = render(value, to);
    let formatted_digits = format_digits(&raw_digits, to);
    Ok(ConversionResult { raw_digits, formatted_digits, value })
}

/// Validate and parse a numeral string. Digits are checked against the
/// base's alphabet first, so the only failure left to `from_str_radix` is
/// overflow past u64.
pub fn parse_digits(input: &str, radix: Radix) -> Result<u64, ConvertError> {
    if !validate(input, radix) {
        return Err(ConvertError::InvalidDigits(radix));
    }
    u64::from_str_radix(input, radix.value()).map_err(|_| ConvertError::OutOfRange)
}

/// Render a value as canonical digits: uppercase, no leading zeros,
/// zero as exactly "0".
pub fn render(value: u64, radix: Radix) -> String {
    match radix {
        Radix::Binary => format!("{value:b}"),
        Radix::Octal => format!("{value:o}"),
        Radix::Decimal => format!("{value}"),
        Radix::Hexadecimal => format!("{value:X}"),
    }
}
