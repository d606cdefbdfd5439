use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::radix::Radix;

/// One recorded conversion, newest kept at the head of the ledger.
///
/// The serde layout matches the persisted `history` key:
/// `{"from": "FF", "to": "11111111", "fromBase": 16, "toBase": 2, "time": <millis>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub from: String,
    pub to: String,
    #[serde(rename = "fromBase")]
    pub from_base: Radix,
    #[serde(rename = "toBase")]
    pub to_base: Radix,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        from_base: Radix,
        to_base: Radix,
    ) -> Self {
        Self { from: from.into(), to: to.into(), from_base, to_base, time: Utc::now() }
    }

    /// True when the other record describes the same conversion,
    /// ignoring the timestamp. Used for head-duplicate suppression.
    pub fn same_conversion(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.from_base == other.from_base
            && self.to_base == other.to_base
    }
}
