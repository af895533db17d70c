use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

use crate::error::ScheduleError;

/// A point in the week: the day and the fractional hour within it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSample {
    day: Weekday,
    hour_of_day: f64,
}

impl TimeSample {
    pub fn new(day: Weekday, hour_of_day: f64) -> Result<Self, ScheduleError> {
        if !(0.0..24.0).contains(&hour_of_day) {
            return Err(ScheduleError::InvalidSample { hour_of_day });
        }
        Ok(Self { day, hour_of_day })
    }

    /// Hours plus minutes; seconds are dropped.
    pub fn from_datetime<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self {
            day: timestamp.weekday(),
            hour_of_day: f64::from(timestamp.hour()) + f64::from(timestamp.minute()) / 60.0,
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn hour_of_day(&self) -> f64 {
        self.hour_of_day
    }
}
