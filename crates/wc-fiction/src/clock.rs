//! The in-world clock.
//!
//! Time only moves when the player does: one hour per successful step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::{START_DAY, START_HOUR};

/// Hours in an in-world day.
pub const HOURS_PER_DAY: u32 = 24;

/// In-world day and hour. One successful move costs one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Day number, starting at 1.
    pub day: u32,
    /// Hour of the day, `0..24`.
    pub hour: u32,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            day: START_DAY,
            hour: START_HOUR,
        }
    }
}

impl Clock {
    /// Create a clock at the given day and hour.
    pub fn at(day: u32, hour: u32) -> Self {
        Self { day, hour }
    }

    /// Move forward one hour, rolling over to the next day at midnight.
    pub fn advance(&mut self) {
        self.hour += 1;
        if self.hour >= HOURS_PER_DAY {
            self.day += 1;
            self.hour = 0;
        }
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} {:02}:00", self.day, self.hour)
    }
}
