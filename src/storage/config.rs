//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. A missing file
//! yields the defaults, which match the dashboard's stock behavior.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::metrics::streak::StreakCounting;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Dashboard settings
    pub dashboard: DashboardSettings,
    /// Progress view settings
    pub progress: ProgressSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            dashboard: DashboardSettings::default(),
            progress: ProgressSettings::default(),
        }
    }
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Length of the "this week" window in days
    pub recent_window_days: i64,
    /// Most recent workouts considered
    pub workout_limit: usize,
    /// Most recent sets considered
    pub set_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
            workout_limit: 10,
            set_limit: 100,
        }
    }
}

/// Progress view settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Most recent workouts considered
    pub workout_limit: usize,
    /// Most recent sets considered
    pub set_limit: usize,
    /// Maximum week buckets charted
    pub chart_weeks: usize,
    /// Active goals previewed
    pub active_goal_preview: usize,
    /// How same-day workouts count towards the streak
    pub streak_counting: StreakCounting,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            workout_limit: 30,
            set_limit: 200,
            chart_weeks: 8,
            active_goal_preview: 5,
            streak_counting: StreakCounting::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load application configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&get_config_path(), config)
}

/// Save application configuration to a specific file.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

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
