//! Editor configuration
//!
//! Grid, undo history and pin placement defaults, with file I/O in JSON or
//! TOML selected by file extension.

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use symedit_core::constants::{DEFAULT_GRID_INTERVAL_NM, DEFAULT_UNDO_LIMIT};
use symedit_core::Length;

/// Grid settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid interval in nanometers
    pub interval_nm: i64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            interval_nm: DEFAULT_GRID_INTERVAL_NM,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UndoSettings {
    /// Maximum number of undo steps kept (0 = unlimited)
    pub limit: usize,
}

impl Default for UndoSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_UNDO_LIMIT,
        }
    }
}

/// Defaults for newly placed pins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinSettings {
    pub default_name: String,
    /// Pin length in nanometers
    pub default_length_nm: i64,
}

impl Default for PinSettings {
    fn default() -> Self {
        Self {
            default_name: "Pin".to_string(),
            default_length_nm: 2_540_000,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub grid: GridSettings,
    pub undo: UndoSettings,
    pub pin: PinSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(SettingsError::UnsupportedFormat(format!(
            "{} (expected .json or .toml)",
            path.display()
        ))),
    }
}

impl EditorSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        settings.validate()?;
        tracing::debug!("loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("saved editor settings to {}", path.display());
        Ok(())
    }

    /// Parse and validate settings from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.grid.interval_nm <= 0 {
            return Err(SettingsError::invalid("grid.interval_nm", "must be > 0"));
        }
        if self.pin.default_name.is_empty() {
            return Err(SettingsError::invalid("pin.default_name", "must not be empty"));
        }
        if self.pin.default_length_nm < 0 {
            return Err(SettingsError::invalid("pin.default_length_nm", "must be >= 0"));
        }
        Ok(())
    }

    pub fn grid_interval(&self) -> Length {
        Length::from_nm(self.grid.interval_nm)
    }

    pub fn default_pin_length(&self) -> Length {
        Length::from_nm(self.pin.default_length_nm)
    }
}

/// Location of the settings file in the platform config directory.
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| SettingsError::ConfigDirectory("no config or home directory".to_string()))?;
    Ok(dir.join("symedit").join("settings.toml"))
}
