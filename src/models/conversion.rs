use serde::{Deserialize, Serialize};

/// Outcome of a successful conversion.
///
/// `formatted_digits` is `raw_digits` with display grouping applied;
/// stripping all whitespace from it always yields `raw_digits` back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Canonical digits: uppercase, ungrouped, no leading zeros ("0" for zero)
    pub raw_digits: String,
    /// Digits grouped for readability (spaces every 4 or 3 characters)
    pub formatted_digits: String,
    /// The numeric value the digits represent
    pub value: u64,
}
