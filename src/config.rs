use std::{fs, net::SocketAddr, time::Duration};

use chrono_tz::Tz;
use serde::Deserialize;

use crate::{error::ConfigError, timing::schedule::WeeklySchedule};

/// Environment variable consulted when no config path is given on the command line.
pub const CONFIG_ENV: &str = "STUDIO_STATUS_CONFIG";

/// Runtime configuration, read from JSON. Every field is optional.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timezone: String,
    pub bind: String,
    pub refresh_secs: u64,
    pub log_level: String,
    pub schedule: WeeklySchedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "Europe/London".to_string(),
            bind: "127.0.0.1:7878".to_string(),
            refresh_secs: 60,
            log_level: "info".to_string(),
            schedule: WeeklySchedule::studio_default(),
        }
    }
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(config)?)
    }

    /// Load from `path`, or fall back to the defaults when there is none.
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_config(&contents)
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.bind.clone()))
    }

    /// Never shorter than a second.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs.max(1))
    }
}
