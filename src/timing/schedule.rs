use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::daily::OpenInterval;

/// Opening hours for each day of the week, indexed Sunday first.
/// Days without an interval are closed all day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawWeek", into = "RawWeek")]
pub struct WeeklySchedule {
    timings: [Option<OpenInterval>; 7],
}

impl WeeklySchedule {
    /// A schedule that is closed every day.
    pub fn new() -> Self {
        Self { timings: [None; 7] }
    }

    /// Mon-Sat 11AM-8PM, Sun 1PM-6PM.
    pub fn studio_default() -> Self {
        // Both intervals satisfy open < close <= 24.
        let weekday = OpenInterval::new(11, 20).ok();
        let sunday = OpenInterval::new(13, 18).ok();
        let mut schedule = Self::new();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            schedule.set(day, weekday);
        }
        schedule.set(Weekday::Sun, sunday);
        schedule
    }

    pub fn with_day(mut self, day: Weekday, timing: OpenInterval) -> Self {
        self.set(day, Some(timing));
        self
    }

    pub fn set(&mut self, day: Weekday, timing: Option<OpenInterval>) {
        self.timings[day.num_days_from_sunday() as usize] = timing;
    }

    pub fn get(&self, day: Weekday) -> Option<OpenInterval> {
        self.timings[day.num_days_from_sunday() as usize]
    }

    /// Days Sunday..Saturday paired with their hours.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, Option<OpenInterval>)> + '_ {
        std::iter::successors(Some(Weekday::Sun), |day| Some(day.succ()))
            .zip(self.timings.iter().copied())
    }
}

/// Full English name, as shown to visitors.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
struct RawWeek {
    #[serde(default)]
    sunday: Option<OpenInterval>,
    #[serde(default)]
    monday: Option<OpenInterval>,
    #[serde(default)]
    tuesday: Option<OpenInterval>,
    #[serde(default)]
    wednesday: Option<OpenInterval>,
    #[serde(default)]
    thursday: Option<OpenInterval>,
    #[serde(default)]
    friday: Option<OpenInterval>,
    #[serde(default)]
    saturday: Option<OpenInterval>,
}

impl From<RawWeek> for WeeklySchedule {
    fn from(raw: RawWeek) -> Self {
        Self {
            timings: [
                raw.sunday,
                raw.monday,
                raw.tuesday,
                raw.wednesday,
                raw.thursday,
                raw.friday,
                raw.saturday,
            ],
        }
    }
}

impl From<WeeklySchedule> for RawWeek {
    fn from(schedule: WeeklySchedule) -> Self {
        let [sunday, monday, tuesday, wednesday, thursday, friday, saturday] = schedule.timings;
        Self {
            sunday,
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_default_hours() {
        let schedule = WeeklySchedule::studio_default();
        let wed = schedule.get(Weekday::Wed).unwrap();
        assert_eq!((wed.open_hour(), wed.close_hour()), (11, 20));
        let sun = schedule.get(Weekday::Sun).unwrap();
        assert_eq!((sun.open_hour(), sun.close_hour()), (13, 18));
    }

    #[test]
    fn days_start_on_sunday() {
        let schedule = WeeklySchedule::new().with_day(Weekday::Sat, OpenInterval::new(9, 12).unwrap());
        let days: Vec<_> = schedule.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].0, Weekday::Sun);
        assert_eq!(days[6], (Weekday::Sat, Some(OpenInterval::new(9, 12).unwrap())));
        assert!(days[..6].iter().all(|(_, timing)| timing.is_none()));
    }

    #[test]
    fn missing_days_deserialize_as_closed() {
        let schedule: WeeklySchedule =
            serde_json::from_str(r#"{"friday": {"open": 10, "close": 22}}"#).unwrap();
        assert!(schedule.get(Weekday::Thu).is_none());
        assert_eq!(schedule.get(Weekday::Fri).unwrap().close_hour(), 22);
    }

    #[test]
    fn invalid_day_rejects_whole_schedule() {
        let result: Result<WeeklySchedule, _> =
            serde_json::from_str(r#"{"monday": {"open": 20, "close": 11}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_by_day_name() {
        let schedule = WeeklySchedule::new().with_day(Weekday::Mon, OpenInterval::new(11, 20).unwrap());
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["monday"]["open"], 11);
        assert!(json["sunday"].is_null());
    }
}
