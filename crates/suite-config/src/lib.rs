//! Settings management for the suite console.
//!
//! This crate locates the settings file, loads it on top of built-in
//! defaults and `SUITE_*` environment overrides, and saves it back when the
//! user changes a persisted preference such as the interface language.

pub mod settings;
pub mod settings_path;

pub use settings::{
    ColorChoice, ConfigError, MIN_PANEL_WIDTH, Settings, load_file_settings, load_settings,
    save_settings,
};
pub use settings_path::resolve_settings_path;
