use crate::models::Radix;

/// Check a numeral string against the digit alphabet of the claimed base.
///
/// The empty string fails (no input is not the same as zero), and so does
/// any whitespace: grouped display strings must be stripped before they are
/// validated again.
pub fn validate(input: &str, radix: Radix) -> bool {
    !input.is_empty() && input.chars().all(|c| is_valid_digit(c, radix))
}

/// Hex digits are accepted in either case
fn is_valid_digit(c: char, radix: Radix) -> bool {
    match radix {
        Radix::Binary => matches!(c, '0' | '1'),
        Radix::Octal => matches!(c, '0'..='7'),
        Radix::Decimal => c.is_ascii_digit(),
        Radix::Hexadecimal => c.is_ascii_hexdigit(),
    }
}
