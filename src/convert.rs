use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::timestamp::Timestamp;
use crate::units::Units;

/// Approximate unit lengths in milliseconds, largest first. Months and
/// years are calendar averages (365.25 days per year), not calendar
/// arithmetic. The scan in [`get`] relies on this ordering to pick the
/// coarsest matching unit.
const TIMES: [(&str, i64); 6] = [
    ("year", 31_557_600_000),
    ("month", 2_629_800_000),
    ("week", 604_800_000),
    ("day", 86_400_000),
    ("hour", 3_600_000),
    ("minute", 60_000),
];

/// Inputs for [`get`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VagueTimeOptions {
    /// The timestamp to convert.
    pub from: Timestamp,
    /// Reference timestamp to compare against. Defaults to the current
    /// wall-clock time, which is always taken in milliseconds whatever
    /// `units` says.
    #[serde(default)]
    pub until: Option<Timestamp>,
    /// Units `from` and `until` are measured in. Defaults to seconds.
    #[serde(default)]
    pub units: Option<Units>,
}

impl VagueTimeOptions {
    pub fn new(from: impl Into<Timestamp>) -> Self {
        Self {
            from: from.into(),
            until: None,
            units: None,
        }
    }

    pub fn until(mut self, until: impl Into<Timestamp>) -> Self {
        self.until = Some(until.into());
        self
    }

    pub fn units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Past,
    Future,
}

impl Direction {
    fn fallback(self) -> &'static str {
        match self {
            Direction::Past => "just now",
            Direction::Future => "now",
        }
    }

    fn format(self, magnitude: i64, unit: &str) -> String {
        let noun = pluralise(unit, magnitude);
        match self {
            Direction::Past => format!("{magnitude} {noun} ago"),
            Direction::Future => format!("in {magnitude} {noun}"),
        }
    }
}

fn pluralise(noun: &str, magnitude: i64) -> String {
    if magnitude > 1 {
        format!("{noun}s")
    } else {
        noun.to_string()
    }
}

/// Convert a precise timestamp into a vague time phrase such as
/// "3 weeks ago", "just now" or "in 2 hours".
///
/// Differences under one minute fall through to "just now" (past) or
/// "now" (future). Equal timestamps count as future and yield "now".
pub fn get(options: &VagueTimeOptions) -> Result<String, Error> {
    let units = options.units.unwrap_or_default();
    let from = options.from.as_millis(units)?;
    let until = match &options.until {
        Some(until) => until.as_millis(units)?,
        None => Utc::now().timestamp_millis(),
    };

    // Zero goes to the future branch, so equal timestamps say "now".
    let (difference, direction) = if until > from {
        (until.checked_sub(from), Direction::Past)
    } else {
        (from.checked_sub(until), Direction::Future)
    };
    let difference =
        difference.ok_or_else(|| Error::InvalidTimestamp(from.to_string()))?;

    for (unit, length) in TIMES {
        if difference >= length {
            let magnitude = difference / length;
            debug!(difference_ms = difference, magnitude, unit, "bucket selected");
            return Ok(direction.format(magnitude, unit));
        }
    }

    debug!(difference_ms = difference, "difference under one minute");
    Ok(direction.fallback().to_string())
}
