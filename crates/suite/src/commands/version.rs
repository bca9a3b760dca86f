//! `suite version` -- print the version, build and the settings in effect.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use suite_core::Language;

use crate::cli::VersionArgs;
use crate::context::RuntimeContext;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier, overridable at compile time with `SUITE_BUILD`.
const BUILD: &str = match option_env!("SUITE_BUILD") {
    Some(b) => b,
    None => "dev",
};

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    build: &'static str,
    os: &'static str,
    arch: &'static str,
    settings: String,
    language: &'static str,
    languages: Vec<&'static str>,
}

impl VersionInfo {
    fn collect(ctx: &RuntimeContext) -> Self {
        Self {
            version: VERSION,
            build: BUILD,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            settings: ctx.settings_path.display().to_string(),
            language: ctx.settings.language.code(),
            languages: Language::ALL.iter().map(|l| l.code()).collect(),
        }
    }
}

/// Execute the `suite version` command.
pub fn run(ctx: &RuntimeContext, args: &VersionArgs) -> Result<()> {
    let info = VersionInfo::collect(ctx);
    let mut out = io::stdout().lock();

    if args.json {
        let json = serde_json::to_string_pretty(&info).context("serializing version info")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(
            out,
            "suite {} ({}) {}/{}",
            info.version, info.build, info.os, info.arch
        )?;
        writeln!(out, "settings: {}", info.settings)?;
        writeln!(out, "language: {} (available: {})", info.language, info.languages.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use suite_config::Settings;

    fn ctx() -> RuntimeContext {
        RuntimeContext {
            settings_path: PathBuf::from("/tmp/suite.yaml"),
            stored: Settings::default(),
            settings: Settings {
                language: Language::Indonesian,
                ..Settings::default()
            },
            color: false,
        }
    }

    #[test]
    fn reports_effective_language_and_all_codes() {
        let info = VersionInfo::collect(&ctx());
        assert!(!info.version.is_empty());
        assert_eq!(info.language, "id");
        assert_eq!(info.languages, vec!["en", "id"]);
        assert_eq!(info.settings, "/tmp/suite.yaml");
    }

    #[test]
    fn serializes_as_flat_object() {
        let value = serde_json::to_value(VersionInfo::collect(&ctx())).unwrap();
        assert_eq!(value["build"], BUILD);
        assert_eq!(value["languages"][1], "id");
    }
}
