//! SymEdit Settings Crate
//!
//! Handles editor configuration: grid, undo history and pin defaults,
//! persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, EditorSettings, GridSettings, PinSettings, UndoSettings};
pub use error::{Result, SettingsError};
