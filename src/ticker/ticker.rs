use std::{sync::Arc, time::Duration};

use chrono::DateTime;
use chrono_tz::Tz;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    status::{
        engine::classify,
        result::{StatusKind, StatusResult},
    },
    timing::{clock::studio_now, sample::TimeSample, schedule::WeeklySchedule},
};

/// Re-evaluates the studio status on a fixed interval and logs it.
///
/// The only thing kept between ticks is the previous kind, so that changes
/// can be reported once. Each tick samples the clock afresh.
pub struct StatusTicker {
    schedule: Arc<WeeklySchedule>,
    timezone: Tz,
    period: Duration,
    last_kind: Option<StatusKind>,
}

impl StatusTicker {
    pub fn setup(schedule: Arc<WeeklySchedule>, timezone: Tz, period: Duration) -> Self {
        Self {
            schedule,
            timezone,
            period,
            last_kind: None,
        }
    }

    pub async fn run(mut self) {
        info!(period_secs = self.period.as_secs(), "Status ticker running");
        let mut ticks = interval(self.period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            self.observe(studio_now(self.timezone));
        }
    }

    /// Classify `now` and log it. Returns the result and whether the kind
    /// differs from the previous observation.
    pub fn observe(&mut self, now: DateTime<Tz>) -> (StatusResult, bool) {
        let sample = TimeSample::from_datetime(&now);
        let status = classify(&self.schedule, &sample);
        let changed = self.last_kind != Some(status.kind);

        if changed {
            info!(
                kind = status.kind.css_class(),
                primary = %status.primary_message,
                next_change = status.secondary_message.as_deref().unwrap_or(""),
                "Studio status changed"
            );
        } else {
            debug!(
                kind = status.kind.css_class(),
                primary = %status.primary_message,
                "Studio status"
            );
        }
        self.last_kind = Some(status.kind);
        (status, changed)
    }
}
