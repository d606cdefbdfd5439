/// Bit and byte counts of a value, for the quick-reference meta line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitInfo {
    pub bits: u32,
    pub bytes: u32,
}

/// Bit length of the base-2 rendering (zero renders as "0", length 1),
/// and the bytes needed to hold those bits.
pub fn derive_bit_info(value: u64) -> BitInfo {
    let bits = if value == 0 { 1 } else { u64::BITS - value.leading_zeros() };
    BitInfo { bits, bytes: bits.div_ceil(8) }
}

impl BitInfo {
    /// "8 bits · 1 byte" style summary
    pub fn summary(&self) -> String {
        format!(
            "{} bit{} · {} byte{}",
            self.bits,
            if self.bits == 1 { "" } else { "s" },
            self.bytes,
            if self.bytes == 1 { "" } else { "s" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_boundary() {
        assert_eq!(derive_bit_info(255), BitInfo { bits: 8, bytes: 1 });
        assert_eq!(derive_bit_info(256), BitInfo { bits: 9, bytes: 2 });
    }

    #[test]
    fn test_zero_counts_one_bit() {
        assert_eq!(derive_bit_info(0), BitInfo { bits: 1, bytes: 1 });
    }

    #[test]
    fn test_small_values() {
        assert_eq!(derive_bit_info(1), BitInfo { bits: 1, bytes: 1 });
        assert_eq!(derive_bit_info(2), BitInfo { bits: 2, bytes: 1 });
        assert_eq!(derive_bit_info(7), BitInfo { bits: 3, bytes: 1 });
    }

    #[test]
    fn test_max_value() {
        assert_eq!(derive_bit_info(u64::MAX), BitInfo { bits: 64, bytes: 8 });
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(derive_bit_info(1).summary(), "1 bit · 1 byte");
        assert_eq!(derive_bit_info(255).summary(), "8 bits · 1 byte");
        assert_eq!(derive_bit_info(256).summary(), "9 bits · 2 bytes");
    }
}
