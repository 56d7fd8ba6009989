//! EdaKit Settings Crate
//!
//! Handles point editor configuration, settings persistence and validation.

pub mod config;
pub mod error;

pub use config::{increment_arc_edit_mode, ArcEditMode, EditorSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
