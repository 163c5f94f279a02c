use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Resolution of the timestamps supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    /// Seconds since the epoch. The default.
    #[default]
    #[serde(rename = "s")]
    Seconds,
    /// Milliseconds since the epoch.
    #[serde(rename = "ms")]
    Milliseconds,
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "s" => Ok(Units::Seconds),
            "ms" => Ok(Units::Milliseconds),
            other => Err(Error::InvalidUnits(other.to_string())),
        }
    }
}
