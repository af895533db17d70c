use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// The opening hours of a single day, as the half-open range `[open, close)`
/// in whole hours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDaily")]
pub struct OpenInterval {
    open: u8,
    close: u8,
}

#[derive(Deserialize)]
struct RawDaily {
    open: u8,
    close: u8,
}

impl TryFrom<RawDaily> for OpenInterval {
    type Error = ScheduleError;

    fn try_from(raw: RawDaily) -> Result<Self, Self::Error> {
        Self::new(raw.open, raw.close)
    }
}

impl OpenInterval {
    pub fn new(open: u8, close: u8) -> Result<Self, ScheduleError> {
        if open >= close || close > 24 {
            return Err(ScheduleError::InvalidInterval { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open_hour(&self) -> u8 {
        self.open
    }

    pub fn close_hour(&self) -> u8 {
        self.close
    }

    /// Whether `hour_of_day` falls inside `[open, close)`.
    pub fn contains(&self, hour_of_day: f64) -> bool {
        f64::from(self.open) <= hour_of_day && hour_of_day < f64::from(self.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_empty_intervals() {
        assert_eq!(
            OpenInterval::new(20, 11),
            Err(ScheduleError::InvalidInterval { open: 20, close: 11 })
        );
        assert!(OpenInterval::new(11, 11).is_err());
        assert!(OpenInterval::new(0, 25).is_err());
    }

    #[test]
    fn accepts_full_day() {
        let day = OpenInterval::new(0, 24).unwrap();
        assert!(day.contains(0.0));
        assert!(day.contains(23.99));
    }

    #[test]
    fn interval_is_half_open() {
        let day = OpenInterval::new(11, 20).unwrap();
        assert!(day.contains(11.0));
        assert!(!day.contains(20.0));
        assert!(!day.contains(10.99));
    }

    #[test]
    fn deserialization_validates() {
        let ok: OpenInterval = serde_json::from_str(r#"{"open": 13, "close": 18}"#).unwrap();
        assert_eq!(ok.open_hour(), 13);
        assert_eq!(ok.close_hour(), 18);
        let bad: Result<OpenInterval, _> = serde_json::from_str(r#"{"open": 18, "close": 13}"#);
        assert!(bad.is_err());
    }
}
