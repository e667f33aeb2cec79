//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SpineResult;

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Spine classifier parameters.
    pub classifier: ClassifierSettings,

    /// Drawing surface defaults.
    pub canvas: CanvasDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Tunable parameters of the spine classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Smoothing window, in rows, for the finite-difference signal.
    pub step: usize,

    /// Minimum horizontal distance (pixels) between consecutive pivots.
    pub curve_delta_threshold: u32,

    /// Invert the red channel of every inspected pixel during the scan.
    pub mutate_for_debug: bool,
}

/// Default drawing surface dimensions in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasDefaults {
    pub width: u32,
    pub height: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "spinetrace_core=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            step: 8,
            curve_delta_threshold: 15,
            mutate_for_debug: true,
        }
    }
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            width: 300,
            height: 450,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from `config_path`.
    ///
    /// A missing file yields the defaults. A file that cannot be read or
    /// parsed is an error, so the caller can report it once logging is up.
    pub fn load_from(config_path: impl AsRef<Path>) -> SpineResult<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, config_path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("spinetrace").join("config.json")
}
