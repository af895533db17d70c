use crate::timing::{sample::TimeSample, schedule::day_name, schedule::WeeklySchedule};

use super::result::{StatusKind, StatusResult};

/// How far ahead of a boundary the "soon" statuses kick in.
pub const SOON_THRESHOLD_HOURS: f64 = 1.0;

/// Classify `sample` against `schedule`.
///
/// Every day is split into closed, opening-soon, open, closing-soon and
/// closed again, with the open part being `[open, close)`. A day with no
/// hours is `ClosedToday` all day.
pub fn classify(schedule: &WeeklySchedule, sample: &TimeSample) -> StatusResult {
    let Some(today) = schedule.get(sample.day()) else {
        return StatusResult::new(StatusKind::ClosedToday, "Closed Today".to_string(), None);
    };

    let now = sample.hour_of_day();
    let open = f64::from(today.open_hour());
    let close = f64::from(today.close_hour());
    let closing_soon = close - SOON_THRESHOLD_HOURS;
    let opening_soon = open - SOON_THRESHOLD_HOURS;

    if today.contains(now) {
        let closes_at = Some(format!("Closes at {}", format_time(today.close_hour())));
        if now >= closing_soon {
            return StatusResult::new(
                StatusKind::ClosingSoon,
                format!("Closing in {} minutes", minutes_until(close, now)),
                closes_at,
            );
        }
        return StatusResult::new(StatusKind::Open, "We're Open!".to_string(), closes_at);
    }

    if opening_soon <= now && now < open {
        return StatusResult::new(
            StatusKind::OpeningSoon,
            format!("Opening in {} minutes", minutes_until(open, now)),
            Some(format!("Opens at {}", format_time(today.open_hour()))),
        );
    }

    StatusResult::new(
        StatusKind::Closed,
        "Currently Closed".to_string(),
        Some(find_next_opening(schedule, sample)),
    )
}

/// Describe when the studio next opens, looking at most one week ahead.
pub fn find_next_opening(schedule: &WeeklySchedule, sample: &TimeSample) -> String {
    if let Some(today) = schedule.get(sample.day()) {
        if sample.hour_of_day() < f64::from(today.open_hour()) {
            return format!("Opens today at {}", format_time(today.open_hour()));
        }
    }

    let mut day = sample.day();
    for _ in 1..=7 {
        day = day.succ();
        if let Some(timing) = schedule.get(day) {
            return format!(
                "Next open: {} at {}",
                day_name(day),
                format_time(timing.open_hour())
            );
        }
    }

    "Check back soon".to_string()
}

/// Whole-hour 12-hour clock label: 0 -> "12AM", 12 -> "12PM", 20 -> "8PM".
pub fn format_time(hour: u8) -> String {
    match hour {
        0 => "12AM".to_string(),
        12 => "12PM".to_string(),
        h if h > 12 => format!("{}PM", h - 12),
        h => format!("{}AM", h),
    }
}

fn minutes_until(boundary: f64, now: f64) -> u32 {
    ((boundary - now) * 60.0).round() as u32
}
