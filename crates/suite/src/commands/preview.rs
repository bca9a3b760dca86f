//! `suite preview` -- render every screen once, without reading input.
//!
//! Useful for checking a translation or a panel width setting without
//! stepping through the menu.

use std::io::{BufRead, Write};

use anyhow::Result;
use suite_core::{Credits, MenuChoice};
use suite_ui::DisplayManager;

use crate::cli::PreviewArgs;
use crate::commands::run::Session;
use crate::context::RuntimeContext;

/// Sample target for the task-result panel.
const SAMPLE_TARGET: &str = "https://web.facebook.com/100000000000001";

/// Execute the `suite preview` command.
pub fn run(ctx: &RuntimeContext, args: &PreviewArgs) -> Result<()> {
    let mut options = ctx.display_options();
    if let Some(width) = args.width {
        options.width = width;
    }
    let mut display = ctx.display_manager(options)?;
    render_all(&mut display, &Session::from(&args.session))
}

/// Renders each screen in the order a user would meet them.
pub fn render_all<W: Write, R: BufRead>(
    display: &mut DisplayManager<W, R>,
    session: &Session,
) -> Result<()> {
    display.show_banner()?;
    display.show_status(&session.credits, &session.account)?;
    display.show_menu()?;
    display.show_language_menu()?;

    let success = display.text("menu.language.changed");
    display.show_success(&success)?;
    let error = display.text("menu.invalid_choice");
    display.show_error(&error)?;
    let notice = display.text("menu.unavailable");
    display.show_notice(&notice)?;

    display.show_progress("", 3, 1)?;
    display.end_progress()?;

    let task = display.text(MenuChoice::ExchangeProfile.label_key());
    display.show_task_result(&task, SAMPLE_TARGET, &Credits::from(10), &Credits::from(12))?;

    tracing::debug!("preview rendered");
    Ok(())
}
