//! Clap CLI definitions for the `suite` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use suite_config::MIN_PANEL_WIDTH;
use suite_core::Language;

/// suite -- interactive console for social growth missions.
#[derive(Parser, Debug)]
#[command(
    name = "suite",
    about = "Interactive console for social growth missions",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Settings file (default: $SUITE_CONFIG, then ./suite.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Interface language for this run (en, id), overriding settings.
    #[arg(long, global = true, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default).
    Run(RunArgs),

    /// Render every screen once without waiting for input.
    Preview(PreviewArgs),

    /// Show or set the persisted interface language.
    Language(LanguageArgs),

    /// Print version information.
    Version(VersionArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Account and balance shown in the status panels.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Credit balance to display.
    #[arg(long, default_value = "0")]
    pub credits: String,

    /// Connected account display name (requires --user-id).
    #[arg(long, requires = "user_id")]
    pub name: Option<String>,

    /// Connected account user id (requires --name).
    #[arg(long, requires = "name")]
    pub user_id: Option<String>,
}

/// Arguments for `suite run`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for `suite preview`.
#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Panel width override for this preview (at least 20).
    #[arg(long, value_parser = parse_panel_width)]
    pub width: Option<usize>,
}

/// Arguments for `suite language`.
#[derive(Args, Debug, Clone)]
pub struct LanguageArgs {
    /// Language to persist (en, id). Prints the current one when omitted.
    #[arg(value_parser = parse_language)]
    pub language: Option<Language>,
}

/// Arguments for `suite version`.
#[derive(Args, Debug, Clone)]
pub struct VersionArgs {
    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `suite completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse_any(s).map_err(|e| e.to_string())
}

fn parse_panel_width(s: &str) -> Result<usize, String> {
    let width = s.trim().parse::<usize>().map_err(|e| e.to_string())?;
    if width < MIN_PANEL_WIDTH {
        return Err(format!("must be at least {MIN_PANEL_WIDTH} columns, got {width}"));
    }
    Ok(width)
}
