//! Configuration module
//!
//! Loads positioner settings from TOML. Configuration is read-only; the
//! crate never writes it back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::align::{AlignX, AlignY, Alignment};
use crate::host::PlatformFamily;
use crate::placement::PlacementStrategy;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Strategy selection
    #[serde(default)]
    pub placement: PlacementConfig,

    /// Default alignment for axes the caller leaves unset
    #[serde(default)]
    pub alignment: Alignment,
}

/// Placement configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub strategy: StrategyOverride,
}

/// Strategy requested in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyOverride {
    /// Pick from the platform family
    #[default]
    Auto,
    /// Always use tray bounds and taskbar edge
    Taskbar,
    /// Always anchor at the cursor
    Cursor,
}

impl StrategyOverride {
    pub fn resolve(&self, platform: PlatformFamily) -> PlacementStrategy {
        match self {
            StrategyOverride::Auto => PlacementStrategy::for_platform(platform),
            StrategyOverride::Taskbar => PlacementStrategy::TaskbarEdge,
            StrategyOverride::Cursor => PlacementStrategy::CursorFallback,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load_default() -> ConfigResult<Self> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("traypos/config.toml")),
            Some(PathBuf::from("./traypos.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                return Self::load(path);
            }
        }

        // Return default config if no file found
        Ok(Self::default())
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Generate a sample configuration file
pub fn generate_sample_config() -> ConfigResult<String> {
    let config = Config {
        placement: PlacementConfig {
            strategy: StrategyOverride::Auto,
        },
        alignment: Alignment::new(AlignX::Center, AlignY::Down),
    };

    Ok(toml::to_string_pretty(&config)?)
}
