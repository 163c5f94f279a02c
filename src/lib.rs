//! Convert a precise timestamp into a vague time phrase such as
//! "3 weeks ago", "just now" or "in 2 hours".
//!
//! The conversion buckets the difference between two instants into the
//! coarsest whole unit (year, month, week, day, hour or minute) using
//! fixed average durations, so it is fast and predictable but not
//! calendar-aware.

pub mod convert;
pub mod error;
pub mod timestamp;
pub mod units;

pub use convert::{VagueTimeOptions, get};
pub use error::Error;
pub use timestamp::Timestamp;
pub use units::Units;
