//! `suite run` -- the interactive menu loop.
//!
//! Each round shows the banner, the status panels and the main menu, then
//! reads one selection. The automation options hand off to an engine that is
//! not part of this console, so they only report that they are unavailable.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use suite_config::save_settings;
use suite_core::{Account, Credits, Language, MenuChoice};
use suite_i18n::Translator;
use suite_ui::DisplayManager;
use tracing::{debug, info};

use crate::cli::{RunArgs, SessionArgs};
use crate::context::RuntimeContext;

/// What the status panels show for this run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub credits: Credits,
    pub account: Account,
}

impl From<&SessionArgs> for Session {
    fn from(args: &SessionArgs) -> Self {
        Self {
            credits: Credits::from(args.credits.as_str()),
            account: Account::from_parts(args.name.as_deref(), args.user_id.as_deref()),
        }
    }
}

/// Execute the `suite run` command.
pub fn run(ctx: &RuntimeContext, args: &RunArgs) -> Result<()> {
    let mut display = ctx.display_manager(ctx.display_options())?;
    let session = Session::from(&args.session);

    let mut stored = ctx.stored.clone();
    let path = ctx.settings_path.clone();
    menu_loop(&mut display, &session, |language| {
        stored.language = language;
        save_settings(&path, &stored)
            .with_context(|| format!("saving settings to {}", path.display()))
    })
}

/// Reads a line, mapping end of input to `None`.
fn read_answer<W: Write, R: BufRead>(
    display: &mut DisplayManager<W, R>,
    message: &str,
) -> Result<Option<String>> {
    match display.prompt(message) {
        Ok(answer) => Ok(Some(answer)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            info!("input closed");
            Ok(None)
        }
        Err(e) => Err(e).context("reading input"),
    }
}

/// Runs menu rounds until the user exits or input ends.
///
/// `persist_language` is called with the new language after every
/// successful language switch.
pub fn menu_loop<W, R, F>(
    display: &mut DisplayManager<W, R>,
    session: &Session,
    mut persist_language: F,
) -> Result<()>
where
    W: Write,
    R: BufRead,
    F: FnMut(Language) -> Result<()>,
{
    loop {
        display.show_banner()?;
        display.show_status(&session.credits, &session.account)?;
        display.show_menu()?;

        let choose = format!("{} : ", display.text("menu.choose"));
        let Some(answer) = read_answer(display, &choose)? else {
            return Ok(());
        };

        match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                let goodbye = display.text("menu.goodbye");
                display.show_success(&goodbye)?;
                return Ok(());
            }
            Ok(MenuChoice::SwitchLanguage) => {
                if !switch_language(display, &mut persist_language)? {
                    return Ok(());
                }
            }
            Ok(choice) => {
                debug!(?choice, "automation option selected");
                let unavailable = display.text("menu.unavailable");
                display.show_notice(&unavailable)?;
            }
            Err(e) => {
                debug!(error = %e, "invalid menu input");
                let invalid = display.text("menu.invalid_choice");
                display.show_error(&invalid)?;
            }
        }

        let press_enter = display.text("menu.continue");
        if read_answer(display, &press_enter)?.is_none() {
            return Ok(());
        }
    }
}

/// Shows the language picker and applies the selection.
///
/// Returns `false` when input ended.
fn switch_language<W, R, F>(display: &mut DisplayManager<W, R>, persist: &mut F) -> Result<bool>
where
    W: Write,
    R: BufRead,
    F: FnMut(Language) -> Result<()>,
{
    display.show_language_menu()?;
    let choose = format!("{} : ", display.text("menu.choose"));
    let Some(answer) = read_answer(display, &choose)? else {
        return Ok(false);
    };

    match Language::parse_any(&answer) {
        Ok(language) => {
            let translator =
                Translator::builtin(language).context("loading built-in text catalog")?;
            display.set_localizer(Box::new(translator));
            persist(language)?;
            info!(%language, "language switched");
            let changed = display.text("menu.language.changed");
            display.show_success(&changed)?;
        }
        Err(e) => {
            debug!(error = %e, "invalid language input");
            let invalid = display.text("menu.invalid_choice");
            display.show_error(&invalid)?;
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use suite_ui::{Console, DisplayOptions};

    type TestDisplay = DisplayManager<Vec<u8>, Cursor<Vec<u8>>>;

    fn display(input: &str) -> TestDisplay {
        let input = Cursor::new(input.as_bytes().to_vec());
        let console = Console::new(Vec::new(), input, false, false);
        let translator = Translator::builtin(Language::English).unwrap();
        DisplayManager::new(console, Box::new(translator), DisplayOptions::default())
    }

    fn output(display: &TestDisplay) -> String {
        String::from_utf8_lossy(display.console().get_ref()).into_owned()
    }

    fn no_persist(_: Language) -> Result<()> {
        panic!("language should not be persisted");
    }

    #[test]
    fn exit_says_goodbye() {
        let mut d = display("06\n");
        menu_loop(&mut d, &Session::default(), no_persist).unwrap();
        let out = output(&d);
        assert!(out.contains("Thank you for using this tool!"));
        assert_eq!(out.matches(">> [Menu] <<").count(), 1);
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let mut d = display("");
        menu_loop(&mut d, &Session::default(), no_persist).unwrap();
        assert!(output(&d).contains(">> [Menu] <<"));
    }

    #[test]
    fn invalid_choice_shows_error_and_repeats() {
        let mut d = display("9\n\n6\n");
        menu_loop(&mut d, &Session::default(), no_persist).unwrap();
        let out = output(&d);
        assert!(out.contains(">> [Error] <<"));
        assert!(out.contains("Invalid choice"));
        assert_eq!(out.matches(">> [Menu] <<").count(), 2);
    }

    #[test]
    fn automation_options_are_unavailable() {
        let mut d = display("1\n\n6\n");
        menu_loop(&mut d, &Session::default(), no_persist).unwrap();
        let out = output(&d);
        assert!(out.contains(">> [Please Wait] <<"));
        assert!(out.contains("not available"));
    }

    #[test]
    fn switching_language_persists_and_relabels() {
        let mut d = display("7\n2\n\n6\n");
        let mut persisted = Vec::new();
        menu_loop(&mut d, &Session::default(), |language| {
            persisted.push(language);
            Ok(())
        })
        .unwrap();
        assert_eq!(persisted, vec![Language::Indonesian]);
        let out = output(&d);
        assert!(out.contains("Bahasa diganti"));
        assert!(out.contains("06. Keluar"));
        assert!(out.contains("Terima kasih"));
    }

    #[test]
    fn invalid_language_keeps_current() {
        let mut d = display("7\nklingon\n\n6\n");
        menu_loop(&mut d, &Session::default(), no_persist).unwrap();
        let out = output(&d);
        assert!(out.contains("Invalid choice"));
        assert!(out.contains("Thank you for using this tool!"));
    }

    #[test]
    fn linked_session_shows_account() {
        let session = Session::from(&SessionArgs {
            credits: "75".to_string(),
            name: Some("Budi".to_string()),
            user_id: Some("1000123".to_string()),
        });
        let mut d = display("6\n");
        menu_loop(&mut d, &session, no_persist).unwrap();
        let out = output(&d);
        assert!(out.contains("Name : Budi"));
        assert!(out.contains("https://web.facebook.com/1000123"));
        assert!(out.contains("Coins : 75"));
    }
}
