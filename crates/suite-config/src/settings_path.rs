//! Discovery of the settings file.
//!
//! The settings file is chosen by, in priority order: an explicit path from
//! the command line, the `SUITE_CONFIG` environment variable, and finally
//! `suite.yaml` in the current directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The default settings file name.
const SETTINGS_FILE_NAME: &str = "suite.yaml";

/// The environment variable that can override the settings file location.
const SETTINGS_PATH_ENV: &str = "SUITE_CONFIG";

/// Resolve the settings file path.
///
/// The file does not need to exist; loading a missing file yields defaults.
///
/// # Examples
///
/// ```no_run
/// use suite_config::resolve_settings_path;
///
/// let path = resolve_settings_path(None);
/// println!("settings at {}", path.display());
/// ```
pub fn resolve_settings_path(explicit: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_with(explicit, std::env::var_os(SETTINGS_PATH_ENV), &cwd)
}

fn resolve_with(explicit: Option<&Path>, env_value: Option<OsString>, cwd: &Path) -> PathBuf {
    // 1. Explicit path (highest priority).
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    // 2. SUITE_CONFIG, ignored when empty.
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(value);
    }

    // 3. suite.yaml in the working directory.
    cwd.join(SETTINGS_FILE_NAME)
}
