//! NumConvert - Base conversion between binary, octal, decimal and hexadecimal
//!
//! This library provides the conversion engine and history ledger behind the
//! `numconvert` binary. It supports:
//!
//! - Validating numeral strings against a claimed base
//! - Converting between the four supported bases with canonical uppercase
//!   output and right-aligned digit grouping for display
//! - Deriving bit/byte counts for a value
//! - A capped, de-duplicating conversion history persisted through a
//!   pluggable key-value store
//!
//! # Example
//!
//! ```
//! use numconvert::engine::convert;
//! use numconvert::models::Radix;
//!
//! let result = convert("FF", Radix::Hexadecimal, Radix::Binary)?;
//! assert_eq!(result.raw_digits, "11111111");
//! assert_eq!(result.formatted_digits, "1111 1111");
//! # Ok::<(), numconvert::engine::ConvertError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod engine;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use engine::{ConvertError, convert, derive_bit_info, format_digits, validate};
pub use ledger::HistoryLedger;
pub use models::{ConversionRecord, ConversionResult, Radix, Theme};
