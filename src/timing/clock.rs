use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The current instant on the studio's wall clock.
pub fn studio_now(timezone: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&timezone)
}

/// Banner clock text, e.g. "7:05 PM".
pub fn format_current_time(timestamp: &DateTime<Tz>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::Europe::London;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        London.from_local_datetime(&naive).unwrap()
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_current_time(&at(19, 5)), "7:05 PM");
        assert_eq!(format_current_time(&at(0, 0)), "12:00 AM");
        assert_eq!(format_current_time(&at(12, 30)), "12:30 PM");
        assert_eq!(format_current_time(&at(9, 45)), "9:45 AM");
    }

    #[test]
    fn now_is_in_requested_zone() {
        assert_eq!(studio_now(London).timezone(), London);
    }
}
