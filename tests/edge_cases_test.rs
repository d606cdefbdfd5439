/// Edge case tests: canonical zero, leading zeros, range extremes,
/// whitespace handling, and the swap/reload re-validation contract
mod common;

use common::{RecordBuilder, seeded_store};
use numconvert::engine::{
    ConvertError, convert, derive_bit_info, format_digits, render, strip_grouping, validate,
};
use numconvert::ledger::HistoryLedger;
use numconvert::models::Radix;

#[test]
fn test_leading_zeros_collapse() {
    assert_eq!(convert("0011", Radix::Binary, Radix::Decimal).unwrap().raw_digits, "3");
    assert_eq!(convert("007", Radix::Octal, Radix::Octal).unwrap().raw_digits, "7");
}

#[test]
fn test_all_zero_digits_render_single_zero() {
    assert_eq!(convert("0000", Radix::Binary, Radix::Hexadecimal).unwrap().raw_digits, "0");
}

#[test]
fn test_u64_max_round_trips() {
    let renderings = [
        (Radix::Binary, "1".repeat(64)),
        (Radix::Octal, "1777777777777777777777".to_string()),
        (Radix::Decimal, "18446744073709551615".to_string()),
        (Radix::Hexadecimal, "FFFFFFFFFFFFFFFF".to_string()),
    ];

    for (radix, digits) in &renderings {
        assert_eq!(&render(u64::MAX, *radix), digits);
        let back = convert(digits, *radix, Radix::Decimal).unwrap();
        assert_eq!(back.value, u64::MAX);
    }
}

#[test]
fn test_one_past_u64_max_is_out_of_range() {
    let too_big = [
        (Radix::Binary, format!("1{}", "0".repeat(64))),
        (Radix::Decimal, "18446744073709551616".to_string()),
        (Radix::Hexadecimal, "10000000000000000".to_string()),
    ];

    for (radix, digits) in &too_big {
        assert_eq!(
            convert(digits, *radix, Radix::Decimal),
            Err(ConvertError::OutOfRange),
            "{digits} in {radix}"
        );
    }
}

#[test]
fn test_long_zero_padded_input_stays_in_range() {
    // Leading zeros never push a small value over the range check
    let padded = format!("{}1", "0".repeat(100));
    assert_eq!(convert(&padded, Radix::Binary, Radix::Decimal).unwrap().raw_digits, "1");
}

#[test]
fn test_grouped_strings_fail_validation_until_stripped() {
    // The swap and history-reload paths must strip before re-validating
    let formatted = convert("FF", Radix::Hexadecimal, Radix::Binary).unwrap().formatted_digits;
    assert_eq!(formatted, "1111 1111");

    assert!(!validate(&formatted, Radix::Binary));
    assert!(validate(&strip_grouping(&formatted), Radix::Binary));
}

#[test]
fn test_whitespace_variants_rejected() {
    for input in ["1 0", " 10", "10 ", "1\t0", "1\n0"] {
        assert!(!validate(input, Radix::Binary), "{input:?}");
        assert!(convert(input, Radix::Binary, Radix::Decimal).is_err());
    }
}

#[test]
fn test_mixed_case_hex_normalizes() {
    let result = convert("dEaDbEeF", Radix::Hexadecimal, Radix::Hexadecimal).unwrap();
    assert_eq!(result.raw_digits, "DEADBEEF");
    assert_eq!(result.formatted_digits, "DEAD BEEF");
}

#[test]
fn test_grouping_boundaries() {
    // Below, at, and above one full cluster
    assert_eq!(format_digits("111", Radix::Binary), "111");
    assert_eq!(format_digits("1111", Radix::Binary), "1111");
    assert_eq!(format_digits("11111", Radix::Binary), "1 1111");

    assert_eq!(format_digits("77", Radix::Octal), "77");
    assert_eq!(format_digits("777", Radix::Octal), "777");
    assert_eq!(format_digits("7777", Radix::Octal), "7 777");
}

#[test]
fn test_decimal_never_grouped() {
    let digits = render(18_446_744_073_709_551_615, Radix::Decimal);
    assert_eq!(format_digits(&digits, Radix::Decimal), digits);
}

#[test]
fn test_bit_info_around_boundaries() {
    assert_eq!(derive_bit_info(0).bits, 1);
    assert_eq!(derive_bit_info(1).bits, 1);
    assert_eq!(derive_bit_info((1 << 53) - 1).bits, 53);
    assert_eq!(derive_bit_info(1 << 53).bits, 54);
    assert_eq!(derive_bit_info(u64::MAX).bytes, 8);
}

#[test]
fn test_ledger_tolerates_record_with_future_timestamp() {
    // Clock skew in the persisted file must not break loading
    let record = RecordBuilder::new().time_millis(4_102_444_800_000).build(); // year 2100
    let store = seeded_store(&[record]);

    let ledger = HistoryLedger::load(&store);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_ledger_load_skips_unknown_base_numbers() {
    // A hand-edited file with an unsupported base is treated as corrupt,
    // not partially loaded
    let mut store = numconvert::storage::MemoryStore::new();
    use numconvert::storage::KeyValueStore;
    store
        .set(
            numconvert::ledger::HISTORY_KEY,
            r#"[{"from":"12","to":"5","fromBase":7,"toBase":10,"time":1700000000000}]"#,
        )
        .unwrap();

    let ledger = HistoryLedger::load(&store);
    assert!(ledger.is_empty());
}
