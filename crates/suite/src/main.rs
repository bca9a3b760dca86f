//! `suite` -- interactive console for social growth missions.
//!
//! Parses CLI arguments with clap, resolves the runtime context from the
//! settings file, and dispatches to command handlers. Without a subcommand
//! the interactive menu runs.

mod cli;
mod commands;
mod context;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, RunArgs};
use context::RuntimeContext;

/// Log filter for `-v` when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "suite=debug,suite_ui=debug,suite_config=debug,suite_i18n=debug";

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        // Leave the prompt line before exiting.
        println!();
        std::process::exit(0);
    });

    let cli = Cli::parse();

    if cli.global.verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = dispatch(&cli);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Runs the selected command. Completion needs no settings; everything else
/// loads them first.
fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completion(args)) = &cli.command {
        return commands::completion::run(args);
    }

    let ctx = RuntimeContext::from_global_args(&cli.global)?;
    match &cli.command {
        Some(Commands::Run(args)) => commands::run::run(&ctx, args),
        Some(Commands::Preview(args)) => commands::preview::run(&ctx, args),
        Some(Commands::Language(args)) => commands::language::run(&ctx, args),
        Some(Commands::Version(args)) => commands::version::run(&ctx, args),
        Some(Commands::Completion(args)) => commands::completion::run(args),
        None => commands::run::run(&ctx, &RunArgs::default()),
    }
}
