//! Settings types and loading for the suite console.
//!
//! The main entry point is [`Settings`]. Configuration is loaded with
//! [`load_settings`], which layers, in increasing priority, the built-in
//! defaults, the YAML settings file, and `SUITE_*` environment variables.
//! [`save_settings`] writes the file back.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use suite_core::Language;
use thiserror::Error;
use tracing::debug;

/// Prefix for environment overrides (`SUITE_PANEL_WIDTH=60`).
pub const ENV_PREFIX: &str = "SUITE_";

/// Narrowest panel that still fits borders, padding and a short label.
pub const MIN_PANEL_WIDTH: usize = 20;

/// Default panel width in display columns.
pub const DEFAULT_PANEL_WIDTH: usize = 55;

/// Default profile link prefix; the user id is appended to it.
pub const DEFAULT_PROFILE_URL_BASE: &str = "https://web.facebook.com/";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("failed to access settings file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The settings could not be serialized to YAML.
    #[error("failed to serialize settings: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The layered sources could not be merged into [`Settings`].
    #[error("failed to load settings: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// A settings value was invalid.
    #[error("invalid settings value for key '{key}': {reason}")]
    InvalidValue {
        /// The settings key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Color choice
// ---------------------------------------------------------------------------

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when the terminal supports it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

// ---------------------------------------------------------------------------
// Main settings struct
// ---------------------------------------------------------------------------

/// The full console settings, corresponding to the settings YAML file.
///
/// All fields have defaults so a partially-specified file loads cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Interface language.
    #[serde(default)]
    pub language: Language,

    /// Panel width in display columns.
    #[serde(default = "default_panel_width")]
    pub panel_width: usize,

    /// Prefix of the connected-account profile link.
    #[serde(default = "default_profile_url_base")]
    pub profile_url_base: String,

    /// Color output policy.
    #[serde(default)]
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            panel_width: default_panel_width(),
            profile_url_base: default_profile_url_base(),
            color: ColorChoice::default(),
        }
    }
}

fn default_panel_width() -> usize {
    DEFAULT_PANEL_WIDTH
}

fn default_profile_url_base() -> String {
    DEFAULT_PROFILE_URL_BASE.to_string()
}

impl Settings {
    /// Checks values that deserialize fine but cannot be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a panel narrower than
    /// [`MIN_PANEL_WIDTH`].
    pub fn validate(&self) -> Result<()> {
        if self.panel_width < MIN_PANEL_WIDTH {
            return Err(ConfigError::InvalidValue {
                key: "panel_width".to_string(),
                reason: format!(
                    "must be at least {MIN_PANEL_WIDTH} columns, got {}",
                    self.panel_width
                ),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Defaults plus the settings file, without environment overrides.
///
/// A missing or empty file contributes nothing.
fn file_figment(path: &Path) -> Result<Figment> {
    let figment = Figment::from(Serialized::defaults(Settings::default()));

    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(figment);
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        debug!(path = %path.display(), "settings file is empty");
        return Ok(figment);
    }

    debug!(path = %path.display(), "loading settings file");
    Ok(figment.merge(Yaml::string(&content)))
}

/// Build the layered figment for a settings file: defaults, then the file,
/// then `SUITE_*` environment variables. `SUITE_CONFIG` names the file and
/// is not a setting.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read.
pub fn settings_figment(path: &Path) -> Result<Figment> {
    Ok(file_figment(path)?.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"])))
}

/// Load the effective settings: defaults, the file at `path`, and env
/// overrides.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file cannot be read,
/// [`ConfigError::Extract`] if a source holds a value of the wrong type, or
/// [`ConfigError::InvalidValue`] if validation fails.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let settings: Settings = settings_figment(path)?.extract().map_err(Box::new)?;
    settings.validate()?;
    Ok(settings)
}

/// Load only what the settings file holds, on top of defaults.
///
/// This is the base to modify and pass to [`save_settings`], so values
/// coming from the environment are never written to disk. No validation is
/// applied; the effective settings from [`load_settings`] are what get
/// rendered.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file cannot be read or
/// [`ConfigError::Extract`] if it holds a value of the wrong type.
pub fn load_file_settings(path: &Path) -> Result<Settings> {
    let settings: Settings = file_figment(path)?.extract().map_err(Box::new)?;
    Ok(settings)
}

/// Save settings to `path` as YAML, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or
/// [`ConfigError::ParseError`] if serialization fails.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(settings)?;
    std::fs::write(path, yaml)?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
