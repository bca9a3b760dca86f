//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the resolved
//! settings file, the effective settings, and the output flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use suite_config::{
    ColorChoice, Settings, load_file_settings, load_settings, resolve_settings_path,
};
use suite_i18n::Translator;
use suite_ui::terminal::supports_color;
use suite_ui::{Console, DisplayManager, DisplayOptions};
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved settings file path (may not exist yet).
    pub settings_path: PathBuf,

    /// What the settings file holds, over defaults. Environment and
    /// command-line overrides are not applied; this is what gets written back
    /// when a preference is persisted.
    pub stored: Settings,

    /// Effective settings for this run: file, `SUITE_*` env, then flags.
    pub settings: Settings,

    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Color priority: `--no-color` flag > `color` setting > terminal detection.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let settings_path = resolve_settings_path(global.config.as_deref());
        let mut settings = load_settings(&settings_path)
            .with_context(|| format!("loading settings from {}", settings_path.display()))?;
        let stored = load_file_settings(&settings_path)
            .with_context(|| format!("loading settings from {}", settings_path.display()))?;

        if let Some(language) = global.lang {
            settings.language = language;
        }

        let color = !global.no_color
            && match settings.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => supports_color(),
            };

        debug!(
            path = %settings_path.display(),
            language = %settings.language,
            color,
            "runtime context ready"
        );

        Ok(Self {
            settings_path,
            stored,
            settings,
            color,
        })
    }

    /// Display options derived from the effective settings.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            width: self.settings.panel_width,
            profile_url_base: self.settings.profile_url_base.clone(),
        }
    }

    /// Builds the display manager over stdio in the effective language.
    pub fn display_manager(&self, options: DisplayOptions) -> Result<DisplayManager> {
        let translator =
            Translator::builtin(self.settings.language).context("loading built-in text catalog")?;
        Ok(DisplayManager::new(
            Console::stdio(self.color),
            Box::new(translator),
            options,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suite_core::Language;

    fn global(config: PathBuf) -> GlobalArgs {
        GlobalArgs {
            config: Some(config),
            lang: None,
            no_color: true,
            verbose: false,
        }
    }

    #[test]
    fn missing_settings_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let args = global(dir.path().join("suite.yaml"));
        let ctx = RuntimeContext::from_global_args(&args).unwrap();
        assert_eq!(ctx.settings.panel_width, 55);
        assert!(!ctx.color);
        assert_eq!(ctx.display_options().width, 55);
    }

    #[test]
    fn lang_flag_overrides_without_touching_stored() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = global(dir.path().join("suite.yaml"));
        args.lang = Some(Language::Indonesian);
        let ctx = RuntimeContext::from_global_args(&args).unwrap();
        assert_eq!(ctx.settings.language, Language::Indonesian);
        assert_eq!(ctx.stored.language, Language::English);
    }

    #[test]
    fn invalid_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.yaml");
        std::fs::write(&path, "panel_width: 3\n").unwrap();
        let err = RuntimeContext::from_global_args(&global(path)).unwrap_err();
        assert!(format!("{err:#}").contains("panel_width"));
    }
}
