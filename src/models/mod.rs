//! Data models for the base converter.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Radix`] - The closed set of supported numeral bases
//! - [`ConversionResult`] - Canonical and display forms of a converted value
//! - [`ConversionRecord`] - One persisted history entry
//! - [`Theme`] - Light/dark color scheme preference
//!
//! `Radix` and `ConversionRecord` use serde so that the persisted layout
//! keeps bases as plain numbers and timestamps as epoch milliseconds.

pub mod conversion;
pub mod history;
pub mod radix;
pub mod theme;

pub use conversion::ConversionResult;
pub use history::ConversionRecord;
pub use radix::{Radix, RadixParseError};
pub use theme::{THEME_KEY, Theme};
