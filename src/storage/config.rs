//! Application configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::goals::DailyGoals;
use crate::tracker::types::TrackerConfig;

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric units (km/h, km)
    #[default]
    Metric,
    /// Imperial units (mph, miles)
    Imperial,
}

impl Units {
    /// Convert a speed in km/h to the preferred units.
    pub fn convert_speed(self, speed_kmh: f64) -> (f64, &'static str) {
        match self {
            Units::Metric => (speed_kmh, "km/h"),
            Units::Imperial => (speed_kmh * 0.621371, "mph"),
        }
    }

    /// Convert a distance in km to the preferred units.
    pub fn convert_distance(self, distance_km: f64) -> (f64, &'static str) {
        match self {
            Units::Metric => (distance_km, "km"),
            Units::Imperial => (distance_km * 0.621371, "mi"),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Metric => write!(f, "Metric"),
            Units::Imperial => write!(f, "Imperial"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Unit preference
    pub units: Units,
    /// Workout tracking settings
    pub tracker: TrackerConfig,
    /// Daily goal targets
    pub goals: DailyGoals,
    /// Demo ride settings
    pub simulation: SimulationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            units: Units::default(),
            tracker: TrackerConfig::default(),
            goals: DailyGoals::default(),
            simulation: SimulationSettings::default(),
        }
    }
}

/// Settings for the demo binary's simulated ride.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// How long the simulated ride runs, in seconds
    pub duration_seconds: u32,
    /// Seconds between simulated GPS fixes
    pub fix_interval_seconds: u32,
    /// Seed for a reproducible ride
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            duration_seconds: 30,
            fix_interval_seconds: 3,
            seed: None,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("run", "fixie", "Fixierun")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
