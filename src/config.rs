use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::store::ViewSettings;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PROFILES_DIR: &str = "./profiles";
pub const DEFAULT_TICK_MS: u64 = 200;
pub const DEFAULT_PICKUP_WINDOW_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings, all optional and read from `TRACKER_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub bind_addr: SocketAddr,
    pub profiles_dir: PathBuf,
    pub tick_interval: Duration,
    pub pickup_window: Duration,
    pub items_per_page: usize,
    /// JSON-lines snapshot replay; without one the tracker never goes live
    pub replay_file: Option<PathBuf>,
    pub tables_file: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            profiles_dir: PathBuf::from(DEFAULT_PROFILES_DIR),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            pickup_window: Duration::from_secs(DEFAULT_PICKUP_WINDOW_SECS),
            items_per_page: ViewSettings::default().items_per_page,
            replay_file: None,
            tables_file: None,
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            bind_addr: parse(&value, "TRACKER_BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            profiles_dir: value("TRACKER_PROFILES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.profiles_dir),
            tick_interval: parse::<u64>(&value, "TRACKER_TICK_MS")?
                .map(|ms| Duration::from_millis(ms.max(1)))
                .unwrap_or(defaults.tick_interval),
            pickup_window: parse::<u64>(&value, "TRACKER_PICKUP_WINDOW_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.pickup_window),
            items_per_page: parse::<usize>(&value, "TRACKER_ITEMS_PER_PAGE")?
                .map(ViewSettings::clamp_page_size)
                .unwrap_or(defaults.items_per_page),
            replay_file: value("TRACKER_REPLAY_FILE").map(PathBuf::from),
            tables_file: value("TRACKER_TABLES_FILE").map(PathBuf::from),
        })
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            items_per_page: self.items_per_page,
            show_all: false,
        }
    }
}

fn parse<T: FromStr>(
    value: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    value(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue { key, value: raw })
        })
        .transpose()
}
