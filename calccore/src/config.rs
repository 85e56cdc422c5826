//! Calculator preferences
//!
//! Read-only JSON file in the platform config directory. Every field has a
//! default, so a partial file (or no file at all) is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::logging::LoggingConfig;

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "calculator.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no config directory on this platform")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Point size of the display digits.
    pub display_font_size: f32,
    /// Width and height of a single keypad button.
    pub button_size: [f32; 2],
    /// Gap between keypad buttons, both axes.
    pub button_gap: f32,
    pub logging: LoggingConfig,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            display_font_size: 28.0,
            button_size: [56.0, 44.0],
            button_gap: 7.0,
            logging: LoggingConfig::default(),
        }
    }
}

impl CalcConfig {
    /// `~/.config/slowos/calculator.json` or the platform equivalent.
    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "slowos")
            .map(|p| p.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path()?;
        match Self::load(&path) {
            Ok(config) => Ok(Some(config.sanitized())),
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Clamp geometry to something that can still draw a usable keypad.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.display_font_size.is_finite() && self.display_font_size >= 8.0) {
            self.display_font_size = defaults.display_font_size;
        }
        for (dim, default) in self.button_size.iter_mut().zip(defaults.button_size) {
            if !(dim.is_finite() && *dim >= 16.0) {
                *dim = default;
            }
        }
        if !(self.button_gap.is_finite() && self.button_gap >= 0.0) {
            self.button_gap = defaults.button_gap;
        }
        self
    }
}
