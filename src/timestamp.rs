use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::units::Units;

/// A point in time, counted since the epoch in the caller's units.
///
/// Accepts a plain integer or a numeric string, so a deserialized
/// `{"from": 1234567890}` and `{"from": "1234567890"}` behave the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Integer(i64),
    Text(String),
}

impl Timestamp {
    /// Scale to milliseconds, parsing the string form as a base-10
    /// integer. Malformed strings and values that overflow when scaled
    /// are validation errors.
    pub(crate) fn as_millis(&self, units: Units) -> Result<i64, Error> {
        let raw = match self {
            Timestamp::Integer(n) => *n,
            Timestamp::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidTimestamp(s.clone()))?,
        };

        match units {
            Units::Seconds => raw
                .checked_mul(1000)
                .ok_or_else(|| Error::InvalidTimestamp(raw.to_string())),
            Units::Milliseconds => Ok(raw),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::Integer(value)
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Text(value)
    }
}
