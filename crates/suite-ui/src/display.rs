//! The display manager: every screen the console application shows.
//!
//! [`DisplayManager`] owns a [`Console`] and a [`Localize`] implementation,
//! both injected at construction. Each method builds one fixed-layout panel
//! (or line) and writes it; there is no state carried between calls.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use suite_core::{Account, Credits, Language, MenuChoice};
use suite_i18n::Localize;
use tracing::trace;

use crate::console::Console;
use crate::panel::{Align, Panel};
use crate::styles::{Line, Tone};

/// Width of the banner, independent of the configured panel width.
pub const BANNER_WIDTH: usize = 55;

/// Default width of every other panel.
pub const DEFAULT_WIDTH: usize = 55;

/// Subtitle that visually leads from a menu into the prompt below it.
const MENU_SUBTITLE: &str = "╭─────";

const PROMPT_MARKER: &str = "   ╰─> ";
const PROGRESS_MARKER: &str = "   ──> ";

/// Banner art, one row per entry, each row a list of spans.
const BANNER: &[&[(&str, Tone)]] = &[
    &[("●", Tone::Red), (" ●", Tone::Yellow), (" ●", Tone::Green)],
    &[(r"                   _    _ _   _           ", Tone::Blue)],
    &[(r"                  | |  | | | | |          ", Tone::Blue)],
    &[(r"                  | |__|_  _|| |__        ", Tone::Blue)],
    &[(r"                  |____| |_| |____|       ", Tone::Blue)],
    &[(r"               ___        _  _        ", Tone::Purple)],
    &[(r"              / __| _  _ (_)| |_  ___ ", Tone::Purple)],
    &[(r"              \__ \| || || ||  _|/ -_)", Tone::Purple)],
    &[(r"              |___/ \_,_||_| \__|\___|", Tone::Purple)],
    &[],
    &[],
    &[("                     ", Tone::Plain), ("Coded by LavX", Tone::Highlight)],
];

/// Values injected from settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Panel width in display columns.
    pub width: usize,
    /// Profile link prefix; the user id is appended.
    pub profile_url_base: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            profile_url_base: "https://web.facebook.com/".to_string(),
        }
    }
}

/// The three single-message panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Notice,
}

impl MessageKind {
    /// Localization key of the panel title.
    pub fn title_key(self) -> &'static str {
        match self {
            MessageKind::Success => "status.success",
            MessageKind::Error => "status.error",
            MessageKind::Notice => "status.wait",
        }
    }

    /// Tone of the message body.
    pub fn tone(self) -> Tone {
        match self {
            MessageKind::Success => Tone::Green,
            MessageKind::Error => Tone::Red,
            MessageKind::Notice => Tone::White,
        }
    }
}

/// Renders the console screens through an injected console and localizer.
pub struct DisplayManager<W: Write = Stdout, R: BufRead = StdinLock<'static>> {
    console: Console<W, R>,
    text: Box<dyn Localize>,
    options: DisplayOptions,
}

impl<W: Write, R: BufRead> DisplayManager<W, R> {
    pub fn new(console: Console<W, R>, text: Box<dyn Localize>, options: DisplayOptions) -> Self {
        Self {
            console,
            text,
            options,
        }
    }

    /// Replaces the localizer, e.g. after the user switches language.
    pub fn set_localizer(&mut self, text: Box<dyn Localize>) {
        self.text = text;
    }

    /// Looks up localized text.
    pub fn text(&self, key: &str) -> String {
        self.text.text(key)
    }

    pub fn console(&self) -> &Console<W, R> {
        &self.console
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Consumes the manager, returning its console.
    pub fn into_console(self) -> Console<W, R> {
        self.console
    }

    fn width(&self) -> usize {
        self.console.fit_width(self.options.width)
    }

    /// `>> [{text}] <<`, the panel title format.
    fn title(&self, key: &str) -> String {
        format!(">> [{}] <<", self.text(key))
    }

    /// `{label} :` followed by a styled value.
    fn field(&self, key: &str, value: &str, tone: Tone) -> Line {
        Line::styled(format!("{} :", self.text(key)), Tone::White)
            .push(format!(" {value}"), tone)
    }

    /// Clears the terminal. Does nothing when the console is not a terminal.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.console.clear()
    }

    /// Clears the screen and prints the banner.
    pub fn show_banner(&mut self) -> io::Result<()> {
        self.clear_screen()?;
        let rows = BANNER.iter().map(|row| {
            row.iter()
                .fold(Line::new(), |line, (text, tone)| line.push(*text, *tone))
        });
        let panel = Panel::new(self.console.fit_width(BANNER_WIDTH)).lines(rows);
        self.console.print_panel(&panel)
    }

    /// Prints the connected-account panel for a linked account, then the
    /// credits panel.
    pub fn show_status(&mut self, credits: &Credits, account: &Account) -> io::Result<()> {
        if let Account::Linked { name, .. } = account {
            let link = account
                .profile_link(&self.options.profile_url_base)
                .unwrap_or_default();
            let panel = Panel::new(self.width())
                .title(self.title("status.facebook_connected"))
                .line(self.field("status.name", name, Tone::Green))
                .line(self.field("status.link", &link, Tone::Red));
            self.console.print_panel(&panel)?;
        }

        let panel = Panel::new(self.width())
            .title(self.title("status.status"))
            .line(self.field("status.coins", credits.as_str(), Tone::Red));
        self.console.print_panel(&panel)
    }

    /// Prints the seven main-menu options in fixed order.
    pub fn show_menu(&mut self) -> io::Result<()> {
        let rows: Vec<Line> = MenuChoice::ALL
            .iter()
            .map(|choice| {
                Line::styled(format!("{:02}", choice.number()), Tone::Green)
                    .push(format!(". {}", self.text(choice.label_key())), Tone::White)
            })
            .collect();
        let panel = Panel::new(self.width())
            .title(">> [Menu] <<")
            .subtitle(MENU_SUBTITLE, Align::Left)
            .lines(rows);
        self.console.print_panel(&panel)
    }

    /// Prints the language picker.
    pub fn show_language_menu(&mut self) -> io::Result<()> {
        let rows: Vec<Line> = Language::ALL
            .iter()
            .map(|language| {
                Line::styled(
                    format!("{}. {}", language.number(), self.text(language.label_key())),
                    Tone::White,
                )
            })
            .collect();
        let panel = Panel::new(self.width())
            .title(self.title("menu.language.select"))
            .subtitle(MENU_SUBTITLE, Align::Left)
            .lines(rows);
        self.console.print_panel(&panel)
    }

    /// Prints a single-message panel of the given kind and width.
    pub fn show_message(
        &mut self,
        kind: MessageKind,
        message: &str,
        width: usize,
    ) -> io::Result<()> {
        let panel = Panel::new(self.console.fit_width(width))
            .title(self.title(kind.title_key()))
            .line(Line::styled(message, kind.tone()));
        self.console.print_panel(&panel)
    }

    pub fn show_success(&mut self, message: &str) -> io::Result<()> {
        self.show_success_with_width(message, self.options.width)
    }

    pub fn show_success_with_width(&mut self, message: &str, width: usize) -> io::Result<()> {
        self.show_message(MessageKind::Success, message, width)
    }

    pub fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.show_error_with_width(message, self.options.width)
    }

    pub fn show_error_with_width(&mut self, message: &str, width: usize) -> io::Result<()> {
        self.show_message(MessageKind::Error, message, width)
    }

    pub fn show_notice(&mut self, message: &str) -> io::Result<()> {
        self.show_notice_with_width(message, self.options.width)
    }

    pub fn show_notice_with_width(&mut self, message: &str, width: usize) -> io::Result<()> {
        self.show_message(MessageKind::Notice, message, width)
    }

    /// Prints the running success/failure tally on a line that the next call
    /// overwrites.
    ///
    /// `message` labels the tally so a caller can name the running task. This
    /// extends the classic screen, which always showed the localized mission
    /// label: passing an empty `message` reproduces that output exactly.
    pub fn show_progress(
        &mut self,
        message: &str,
        success_count: u64,
        fail_count: u64,
    ) -> io::Result<()> {
        let label = if message.is_empty() {
            self.text("status.mission_progress")
        } else {
            message.to_string()
        };
        let line = Line::styled(
            format!(
                "{PROGRESS_MARKER}{label} [{}:-",
                self.text("status.success_count")
            ),
            Tone::White,
        )
        .push(success_count.to_string(), Tone::Green)
        .push(format!(" {}:-", self.text("status.failed_count")), Tone::White)
        .push(fail_count.to_string(), Tone::Red)
        .push("]     ", Tone::White);
        trace!(success_count, fail_count, "progress");
        self.console.print_overwrite(&line)
    }

    /// Ends a run of progress lines by advancing to a fresh line.
    pub fn end_progress(&mut self) -> io::Result<()> {
        self.console.print_line(&Line::new())
    }

    /// Prints a prompt and blocks for one line of input, returned verbatim.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        let line = Line::styled(format!("{PROMPT_MARKER}{message}"), Tone::BrightWhite);
        self.console.input(&line)
    }

    /// Prints the summary of one completed task.
    pub fn show_task_result(
        &mut self,
        task_type: &str,
        target_url: &str,
        old_credits: &Credits,
        new_credits: &Credits,
    ) -> io::Result<()> {
        let success = self.text("status.success");
        let credits = Line::styled(format!("{} :", self.text("status.coins")), Tone::White)
            .push(format!(" {old_credits}"), Tone::Green)
            .push(" >", Tone::White)
            .push(format!(" {new_credits}"), Tone::Green);
        let panel = Panel::new(self.width())
            .title(self.title("status.success"))
            .line(self.field("status.status", &format!("{success}..."), Tone::Green))
            .line(
                Line::styled(format!("{task_type} :"), Tone::White)
                    .push(format!(" {target_url}"), Tone::Red),
            )
            .line(credits);
        self.console.print_panel(&panel)
    }
}
