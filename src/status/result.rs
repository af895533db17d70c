use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusKind {
    Open,
    ClosingSoon,
    OpeningSoon,
    Closed,
    ClosedToday,
}

impl StatusKind {
    /// Text for the floating action-button tooltip.
    pub fn tooltip(&self) -> &'static str {
        match self {
            StatusKind::Open => "We're Open!",
            StatusKind::ClosingSoon => "Closing Soon",
            StatusKind::OpeningSoon => "Opening Soon",
            StatusKind::Closed | StatusKind::ClosedToday => "Currently Closed",
        }
    }

    /// Class the banner and the action button are styled with.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Open => "open",
            StatusKind::ClosingSoon => "closing-soon",
            StatusKind::OpeningSoon => "opening-soon",
            StatusKind::Closed | StatusKind::ClosedToday => "closed",
        }
    }
}

/// One evaluation of the schedule. Built fresh on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusResult {
    pub kind: StatusKind,
    pub primary_message: String,
    pub secondary_message: Option<String>,
}

impl StatusResult {
    pub fn new(kind: StatusKind, primary_message: String, secondary_message: Option<String>) -> Self {
        Self {
            kind,
            primary_message,
            secondary_message,
        }
    }
}
