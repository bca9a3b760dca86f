//! `suite language [CODE]` -- show or persist the interface language.

use anyhow::{Context, Result};
use suite_config::save_settings;
use suite_i18n::{Localize, Translator};
use tracing::info;

use crate::cli::LanguageArgs;
use crate::context::RuntimeContext;

/// Execute the `suite language` command.
pub fn run(ctx: &RuntimeContext, args: &LanguageArgs) -> Result<()> {
    let Some(language) = args.language else {
        let current = ctx.stored.language;
        let text = Translator::builtin(current).context("loading built-in text catalog")?;
        println!("{} ({})", current.code(), text.text(current.label_key()));
        return Ok(());
    };

    let mut settings = ctx.stored.clone();
    settings.language = language;
    save_settings(&ctx.settings_path, &settings)
        .with_context(|| format!("saving settings to {}", ctx.settings_path.display()))?;
    info!(%language, path = %ctx.settings_path.display(), "language saved");

    let text = Translator::builtin(language).context("loading built-in text catalog")?;
    println!("{}", text.text("menu.language.changed"));
    Ok(())
}
