use serde::Serialize;

use crate::status::result::{StatusKind, StatusResult};

/// Body of `/api/status`, shaped for the status banner and the action-button tooltip.
#[derive(Serialize, Clone, Debug)]
pub struct StatusResponse {
    kind: StatusKind,
    class: &'static str,
    message: String,
    next_change: Option<String>,
    tooltip: &'static str,
    current_time: String,
    day: &'static str,
}

impl StatusResponse {
    pub fn new(status: StatusResult, current_time: String, day: &'static str) -> Self {
        let kind = status.kind;
        Self {
            kind,
            class: kind.css_class(),
            message: status.primary_message,
            next_change: status.secondary_message,
            tooltip: kind.tooltip(),
            current_time,
            day,
        }
    }
}

/// One row of `/api/schedule`.
#[derive(Serialize, Clone, Debug)]
pub struct ScheduleEntry {
    day: &'static str,
    hours: String,
}

impl ScheduleEntry {
    pub fn new(day: &'static str, hours: String) -> Self {
        Self { day, hours }
    }
}
