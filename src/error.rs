use thiserror::Error;

/// Raised when a schedule or a time sample is built from values outside
/// their valid ranges. The engine itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid opening hours: {open}-{close} (expected 0 <= open < close <= 24)")]
    InvalidInterval { open: u8, close: u8 },

    #[error("Invalid time sample: hour {hour_of_day} is outside [0, 24)")]
    InvalidSample { hour_of_day: f64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not deserialize config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Could not bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
