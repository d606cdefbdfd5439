//! The conversion engine: stateless pure functions over numeral strings.
//!
//! - [`validate`] - digit-alphabet check for a claimed base
//! - [`convert`] - parse in one base, render canonically in another
//! - [`format_digits`] / [`group_digits`] - right-aligned display grouping
//! - [`derive_bit_info`] - bit/byte counts for the quick-reference panel
//!
//! Failures surface as [`ConvertError`]; nothing here retries or coerces.

pub mod bits;
pub mod convert;
pub mod format;
pub mod validate;

pub use bits::{BitInfo, derive_bit_info};
pub use convert::{ConvertError, convert, parse_digits, render};
pub use format::{format_digits, group_digits, strip_grouping};
pub use validate::validate;
