//! Rounded, titled boxes of styled text.
//!
//! Layout for a panel of total width `W` (in terminal columns):
//!
//! ```text
//! ╭─ title centered in W-4 columns ─╮
//! │ body row padded to W-4 columns  │
//! ╰─ subtitle aligned in W-4 ───────╯
//! ```
//!
//! Titles and subtitles get one space of padding on each side; body rows
//! that are too wide wrap onto extra rows.

use unicode_width::UnicodeWidthChar;

use crate::styles::{Line, Tone, display_width, paint};

/// Narrowest panel that can still draw corners, padding and one glyph.
const MIN_WIDTH: usize = 8;

const TOP_LEFT: &str = "╭";
const TOP_RIGHT: &str = "╮";
const BOTTOM_LEFT: &str = "╰";
const BOTTOM_RIGHT: &str = "╯";
const HORIZONTAL: char = '─';
const VERTICAL: &str = "│";

/// Horizontal placement of a title or subtitle in an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// A bordered block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    width: usize,
    title: Option<String>,
    subtitle: Option<(String, Align)>,
    body: Vec<Line>,
    border: Tone,
}

impl Panel {
    /// A panel `width` columns wide (at least 8).
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            title: None,
            subtitle: None,
            body: Vec::new(),
            border: Tone::BrightWhite,
        }
    }

    /// Sets the centered title in the top edge.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the subtitle in the bottom edge.
    pub fn subtitle(mut self, subtitle: impl Into<String>, align: Align) -> Self {
        self.subtitle = Some((subtitle.into(), align));
        self
    }

    /// Appends a body line.
    pub fn line(mut self, line: Line) -> Self {
        self.body.push(line);
        self
    }

    /// Appends several body lines.
    pub fn lines(mut self, lines: impl IntoIterator<Item = Line>) -> Self {
        self.body.extend(lines);
        self
    }

    /// Total width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    fn inner_width(&self) -> usize {
        self.width - 4
    }

    /// Renders every row of the panel, without line terminators.
    pub fn render_lines(&self, color: bool) -> Vec<String> {
        let inner = self.inner_width();
        let mut out = Vec::with_capacity(self.body.len() + 2);

        let top = edge(
            TOP_LEFT,
            TOP_RIGHT,
            self.title.as_deref().map(|t| (t, Align::Center)),
            inner,
        );
        out.push(paint(&top, self.border, color));

        let left = paint(&format!("{VERTICAL} "), self.border, color);
        let right = paint(&format!(" {VERTICAL}"), self.border, color);
        for line in &self.body {
            for row in line.wrap(inner) {
                let pad = inner.saturating_sub(row.width());
                out.push(format!(
                    "{left}{}{}{right}",
                    row.render(color),
                    " ".repeat(pad)
                ));
            }
        }

        let bottom = edge(
            BOTTOM_LEFT,
            BOTTOM_RIGHT,
            self.subtitle.as_ref().map(|(s, a)| (s.as_str(), *a)),
            inner,
        );
        out.push(paint(&bottom, self.border, color));
        out
    }

    /// Renders the panel as text, one `\n`-terminated row per line.
    pub fn render(&self, color: bool) -> String {
        let mut s = String::new();
        for row in self.render_lines(color) {
            s.push_str(&row);
            s.push('\n');
        }
        s
    }
}

/// Builds a top or bottom edge with an optional label aligned in `inner`
/// columns between the corner pieces.
fn edge(left: &str, right: &str, label: Option<(&str, Align)>, inner: usize) -> String {
    let fill = HORIZONTAL.to_string();
    let middle = match label {
        None => fill.repeat(inner),
        Some((text, align)) => {
            let text = truncate(&format!(" {text} "), inner);
            let excess = inner - display_width(&text);
            let (before, after) = match align {
                Align::Left => (0, excess),
                Align::Center => (excess / 2, excess - excess / 2),
                Align::Right => (excess, 0),
            };
            format!("{}{text}{}", fill.repeat(before), fill.repeat(after))
        }
    };
    format!("{left}{HORIZONTAL}{middle}{HORIZONTAL}{right}")
}

/// Cuts `s` down to at most `width` columns.
fn truncate(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_titled_panel() {
        let panel = Panel::new(12).title("T").line(Line::plain("ab"));
        assert_eq!(
            panel.render(false),
            "╭─── T ────╮\n│ ab       │\n╰──────────╯\n"
        );
    }

    #[test]
    fn every_row_has_panel_width() {
        let panel = Panel::new(30)
            .title(">> [Menu] <<")
            .subtitle("╭─────", Align::Left)
            .line(Line::styled("01", Tone::Green).push(". Exit", Tone::White))
            .line(Line::plain("x".repeat(60)));
        for row in panel.render_lines(false) {
            assert_eq!(display_width(&row), 30, "row {row:?}");
        }
    }

    #[test]
    fn long_body_wraps() {
        let panel = Panel::new(10).line(Line::plain("abcdefghij"));
        let rows = panel.render_lines(false);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], "│ abcdef │");
        assert_eq!(rows[2], "│ ghij   │");
    }

    #[test]
    fn subtitle_alignment() {
        let left = Panel::new(16)
            .subtitle("ab", Align::Left)
            .render_lines(false);
        assert_eq!(left.last().unwrap(), "╰─ ab ─────────╯");
        let right = Panel::new(16)
            .subtitle("ab", Align::Right)
            .render_lines(false);
        assert_eq!(right.last().unwrap(), "╰───────── ab ─╯");
    }

    #[test]
    fn oversized_title_is_truncated() {
        let rows = Panel::new(10)
            .title("a very long title")
            .render_lines(false);
        assert_eq!(display_width(&rows[0]), 10);
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(Panel::new(2).width(), MIN_WIDTH);
    }

    #[test]
    fn color_styles_borders() {
        let rows = Panel::new(12).title("T").render_lines(true);
        assert!(rows[0].contains('\u{1b}'));
        assert!(rows[0].contains(" T "));
    }
}
