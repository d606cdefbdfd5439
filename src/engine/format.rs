use crate::models::Radix;

/// Insert a space every `group_size` characters, right-aligned: the
/// leftmost cluster takes the remainder, every following cluster is full.
/// `"10110"` grouped by 4 becomes `"1 0110"`.
pub fn group_digits(digits: &str, group_size: usize) -> String {
    debug_assert!(group_size > 0);
    if digits.is_empty() {
        return String::new();
    }

    let rem = digits.len() % group_size;
    let mut result = String::with_capacity(digits.len() + digits.len() / group_size);
    result.push_str(&digits[..rem]);
    let mut pos = rem;
    while pos < digits.len() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(&digits[pos..pos + group_size]);
        pos += group_size;
    }
    result
}

/// Format canonical digits for display: uppercase, then grouped by the
/// base's cluster width (decimal stays ungrouped). Empty input is returned
/// unchanged. Stripping all whitespace from the result always yields the
/// uppercased input back.
pub fn format_digits(digits: &str, radix: Radix) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let upper = digits.to_ascii_uppercase();
    match radix.group_size() {
        Some(size) => group_digits(&upper, size),
        None => upper,
    }
}

/// Remove every whitespace character, recovering the canonical digit string
/// from a grouped display string.
pub fn strip_grouping(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits_right_aligned() {
        assert_eq!(group_digits("10110", 4), "1 0110");
        assert_eq!(group_digits("11111111", 4), "1111 1111");
        assert_eq!(group_digits("101", 4), "101");
        assert_eq!(group_digits("1234567", 3), "1 234 567");
    }

    #[test]
    fn test_group_digits_exact_multiple() {
        // A length that divides evenly starts with a full cluster
        assert_eq!(group_digits("ABCD1234", 4), "ABCD 1234");
        assert_eq!(group_digits("777", 3), "777");
    }

    #[test]
    fn test_group_digits_empty() {
        assert_eq!(group_digits("", 4), "");
    }

    #[test]
    fn test_format_digits_per_base() {
        assert_eq!(format_digits("11111111", Radix::Binary), "1111 1111");
        assert_eq!(format_digits("1ff", Radix::Hexadecimal), "1 FF");
        assert_eq!(format_digits("1234", Radix::Octal), "1 234");
        assert_eq!(format_digits("123456", Radix::Decimal), "123456");
    }

    #[test]
    fn test_format_digits_empty_unchanged() {
        for radix in Radix::ALL {
            assert_eq!(format_digits("", radix), "");
        }
    }

    #[test]
    fn test_strip_round_trip() {
        let cases = [
            ("10110", Radix::Binary),
            ("7654321", Radix::Octal),
            ("90210", Radix::Decimal),
            ("DEADBEEF", Radix::Hexadecimal),
            ("0", Radix::Binary),
        ];
        for (digits, radix) in cases {
            assert_eq!(strip_grouping(&format_digits(digits, radix)), digits);
        }
    }

    #[test]
    fn test_format_idempotent_on_stripped() {
        let once = format_digits("101101101", Radix::Binary);
        let again = format_digits(&strip_grouping(&once), Radix::Binary);
        assert_eq!(once, again);
    }
}
