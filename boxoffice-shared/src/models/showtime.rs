use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Start time of a screening, stored as minutes since midnight.
///
/// Ordering follows the clock, so an earlier showtime sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Showtime(u32);

impl Showtime {
    pub fn from_minutes(minutes: u32) -> Result<Self, ShowtimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ShowtimeError::OutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // Range is checked on construction.
        NaiveTime::from_num_seconds_from_midnight_opt(self.0 * 60, 0).unwrap_or_default()
    }
}

/// Renders as `H:MM AM/PM`; midnight and noon both show hour 12.
impl fmt::Display for Showtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive_time().format("%-I:%M %p"))
    }
}

impl TryFrom<u32> for Showtime {
    type Error = ShowtimeError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<Showtime> for u32 {
    fn from(showtime: Showtime) -> Self {
        showtime.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShowtimeError {
    #[error("Showtime out of range: {0} minutes (expected 0-1439)")]
    OutOfRange(u32),
}
