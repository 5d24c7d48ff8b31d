use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Settings stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DashConfig {
    /// Artificial delay before record collections resolve.
    #[serde(default = "default_fetch_delay")]
    pub fetch_delay_ms: u64,

    /// Artificial delay before dashboard headline stats resolve.
    #[serde(default = "default_overview_delay")]
    pub overview_delay_ms: u64,

    /// Rows per page on the shipments, orders and team tables.
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,

    /// Rows per page on the dashboard's recent orders table.
    #[serde(default = "default_recent_page_size")]
    pub recent_orders_page_size: NonZeroUsize,

    /// Read datasets from JSON files here instead of the built-in fixtures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

pub const KEYS: [&str; 5] = [
    "fetch-delay-ms",
    "overview-delay-ms",
    "page-size",
    "recent-orders-page-size",
    "data-dir",
];

fn default_fetch_delay() -> u64 {
    500
}

fn default_overview_delay() -> u64 {
    1000
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN)
}

fn default_recent_page_size() -> NonZeroUsize {
    NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN)
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: default_fetch_delay(),
            overview_delay_ms: default_overview_delay(),
            page_size: default_page_size(),
            recent_orders_page_size: default_recent_page_size(),
            data_dir: None,
        }
    }
}

impl DashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DashConfig = serde_json::from_str(&content)
            .map_err(|e| DashError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn overview_delay(&self) -> Duration {
        Duration::from_millis(self.overview_delay_ms)
    }

    /// Display value for `key`, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "fetch-delay-ms" => self.fetch_delay_ms.to_string(),
            "overview-delay-ms" => self.overview_delay_ms.to_string(),
            "page-size" => self.page_size.to_string(),
            "recent-orders-page-size" => self.recent_orders_page_size.to_string(),
            "data-dir" => self
                .data_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(fixtures)".to_string()),
            _ => return None,
        };
        Some(value)
    }

    /// (key, value) for every key, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Parse and store `value` under `key`. An empty `data-dir` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "fetch-delay-ms" => self.fetch_delay_ms = parse_millis(key, value)?,
            "overview-delay-ms" => self.overview_delay_ms = parse_millis(key, value)?,
            "page-size" => self.page_size = parse_page_size(key, value)?,
            "recent-orders-page-size" => {
                self.recent_orders_page_size = parse_page_size(key, value)?
            }
            "data-dir" => {
                self.data_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            _ => return Err(DashError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| DashError::Config(format!("{} must be a number of milliseconds", key)))
}

fn parse_page_size(key: &str, value: &str) -> Result<NonZeroUsize> {
    value
        .parse()
        .map_err(|_| DashError::Config(format!("{} must be a positive integer", key)))
}
