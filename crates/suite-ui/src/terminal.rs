//! Terminal detection: TTY status, width and color support.

use std::env;

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Terminal width in columns, or `None` when it cannot be determined.
pub fn terminal_columns() -> Option<usize> {
    match crossterm::terminal::size() {
        Ok((0, _)) | Err(_) => None,
        Ok((cols, _)) => Some(usize::from(cols)),
    }
}

/// Determines if ANSI color codes should be used.
///
/// Respects standard conventions:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    color_from_env(|key| env::var(key).ok(), is_tty())
}

fn color_from_env(var: impl Fn(&str) -> Option<String>, tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR").as_deref() == Some("0") {
        return false;
    }

    if var("TERM").as_deref() == Some("dumb") {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some() {
        return true;
    }

    tty
}
