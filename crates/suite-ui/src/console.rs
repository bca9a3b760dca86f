//! Console handle: where panels are written and input lines are read.
//!
//! [`Console`] is generic over its writer and reader so the same rendering
//! code drives the real terminal and in-memory buffers in tests.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

use crate::panel::Panel;
use crate::styles::Line;
use crate::terminal::{is_tty, terminal_columns};

/// Output writer plus input reader, with color and interactivity flags.
pub struct Console<W: Write = Stdout, R: BufRead = StdinLock<'static>> {
    out: W,
    input: R,
    color: bool,
    interactive: bool,
    max_width: Option<usize>,
}

impl Console {
    /// Console over stdout and locked stdin.
    ///
    /// Interactivity (screen clearing, width fitting) follows whether stdout
    /// is a terminal.
    pub fn stdio(color: bool) -> Self {
        let interactive = is_tty();
        let mut console = Console::new(io::stdout(), io::stdin().lock(), color, interactive);
        if interactive {
            console.max_width = terminal_columns();
        }
        console
    }
}

impl<W: Write, R: BufRead> Console<W, R> {
    pub fn new(out: W, input: R, color: bool, interactive: bool) -> Self {
        Self {
            out,
            input,
            color,
            interactive,
            max_width: None,
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Narrows `requested` to the terminal width when it is known.
    pub fn fit_width(&self, requested: usize) -> usize {
        self.max_width.map_or(requested, |max| requested.min(max))
    }

    /// Writes a panel followed by a newline per row.
    pub fn print_panel(&mut self, panel: &Panel) -> io::Result<()> {
        self.out.write_all(panel.render(self.color).as_bytes())?;
        self.out.flush()
    }

    /// Writes one line and a newline.
    pub fn print_line(&mut self, line: &Line) -> io::Result<()> {
        writeln!(self.out, "{}", line.render(self.color))?;
        self.out.flush()
    }

    /// Writes one line and returns the cursor to its start without advancing.
    ///
    /// The next write overwrites the line in place.
    pub fn print_overwrite(&mut self, line: &Line) -> io::Result<()> {
        write!(self.out, "{}\r", line.render(self.color))?;
        self.out.flush()
    }

    /// Writes `prompt` and blocks for one line of input.
    ///
    /// Returns the line without its terminator (`\n` or `\r\n`); nothing else
    /// is trimmed. End of input is [`io::ErrorKind::UnexpectedEof`].
    pub fn input(&mut self, prompt: &Line) -> io::Result<String> {
        write!(self.out, "{}", prompt.render(self.color))?;
        self.out.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }

    /// Clears the screen and homes the cursor. No-op when not interactive.
    pub fn clear(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        crossterm::execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Splits the console back into its writer and reader.
    pub fn into_inner(self) -> (W, R) {
        (self.out, self.input)
    }
}
