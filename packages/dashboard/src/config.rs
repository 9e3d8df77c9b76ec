//! Dashboard configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty document
//! yields the stock dashboard:
//!
//! ```toml
//! window_days = 7
//! leaderboard_size = 10
//! validation_goal = 100
//!
//! [map]
//! default_center = [20.0, 0.0]
//! default_zoom = 2
//! point_zoom = 11
//! padding_px = 40
//! ```

use std::path::{Path, PathBuf};

use ecowatch_analytics::leaderboard::DEFAULT_TOP_N;
use ecowatch_analytics::progress::DEFAULT_VALIDATION_GOAL;
use ecowatch_analytics::timeline::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use ecowatch_spatial_models::MapSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has wrongly-typed fields.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `window_days` is larger than the trend chart supports.
    #[error("window_days must be at most {max}, got {window_days}", max = MAX_WINDOW_DAYS)]
    WindowTooLong {
        /// Configured window.
        window_days: u32,
    },
}

/// Tunables for the dashboard views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Days in the trailing trend window.
    pub window_days: u32,
    /// Rows in the contributor leaderboard.
    pub leaderboard_size: usize,
    /// Validated observations targeted by the progress bar.
    pub validation_goal: u64,
    /// Map viewport parameters.
    pub map: MapSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            leaderboard_size: DEFAULT_TOP_N,
            validation_goal: DEFAULT_VALIDATION_GOAL,
            map: MapSettings::default(),
        }
    }
}

/// Parses a [`DashboardConfig`] from a TOML string.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a field has
/// the wrong type, or [`ConfigError::WindowTooLong`] if `window_days`
/// exceeds [`MAX_WINDOW_DAYS`].
pub fn parse_config_toml(toml_str: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::de::from_str(toml_str)?;

    if config.window_days > MAX_WINDOW_DAYS {
        return Err(ConfigError::WindowTooLong {
            window_days: config.window_days,
        });
    }

    Ok(config)
}

/// Reads and parses a [`DashboardConfig`] from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or the errors
/// of [`parse_config_toml`] if its contents are invalid.
pub fn load_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config_toml(&contents)?;
    log::debug!("Loaded dashboard config from {}", path.display());
    Ok(config)
}
