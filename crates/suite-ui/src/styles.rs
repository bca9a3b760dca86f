//! Styled text for console panels.
//!
//! A [`Line`] is a run of [`Span`]s, each carrying a [`Tone`]. Widths are
//! measured in terminal columns so box drawing lines up for wide glyphs.
//! Colors are applied with `owo-colors` only when the console enables them.

use owo_colors::{OwoColorize, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Named text styles used by the console screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// No styling.
    #[default]
    Plain,
    /// Bold white, the default body text.
    White,
    /// Bold bright white, used for borders, titles and prompts.
    BrightWhite,
    /// Bold green, for values and success.
    Green,
    /// Bold red, for links, balances and errors.
    Red,
    /// Bold yellow.
    Yellow,
    /// Bold blue.
    Blue,
    /// Bold purple.
    Purple,
    /// Bold white on blue, for the attribution badge.
    Highlight,
}

impl Tone {
    fn style(self) -> Option<Style> {
        let bold = Style::new().bold();
        let style = match self {
            Tone::Plain => return None,
            Tone::White => bold.white(),
            Tone::BrightWhite => bold.bright_white(),
            Tone::Green => bold.green(),
            Tone::Red => bold.red(),
            Tone::Yellow => bold.yellow(),
            Tone::Blue => bold.blue(),
            Tone::Purple => bold.magenta(),
            Tone::Highlight => bold.white().on_blue(),
        };
        Some(style)
    }
}

/// Applies `tone` to `s` when `color` is set, otherwise returns it unchanged.
pub fn paint(s: &str, tone: Tone, color: bool) -> String {
    match tone.style() {
        Some(style) if color && !s.is_empty() => s.style(style).to_string(),
        _ => s.to_string(),
    }
}

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// A piece of text with one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One row of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    /// An empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// A line with a single span.
    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self::new().push(text, tone)
    }

    /// An unstyled line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    /// Appends a span, builder style.
    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span::new(text, tone));
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The text without any styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Renders the line, styling each span when `color` is set.
    pub fn render(&self, color: bool) -> String {
        self.spans
            .iter()
            .map(|s| paint(&s.text, s.tone, color))
            .collect()
    }

    /// Splits the line into rows no wider than `width` columns.
    ///
    /// Breaks fall on character boundaries and keep each span's tone. An
    /// empty line yields one empty row. A single glyph wider than `width`
    /// still gets a row of its own.
    pub fn wrap(&self, width: usize) -> Vec<Line> {
        let mut rows = Vec::new();
        let mut row = Line::new();
        let mut row_width = 0;

        for span in &self.spans {
            let mut chunk = String::new();
            for ch in span.text.chars() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                if row_width + w > width && row_width > 0 {
                    if !chunk.is_empty() {
                        row.spans.push(Span::new(std::mem::take(&mut chunk), span.tone));
                    }
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                chunk.push(ch);
                row_width += w;
            }
            if !chunk.is_empty() {
                row.spans.push(Span::new(chunk, span.tone));
            }
        }

        rows.push(row);
        rows
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paint_without_color_is_identity() {
        assert_eq!(paint("hello", Tone::Green, false), "hello");
        assert_eq!(paint("hello", Tone::Plain, true), "hello");
    }

    #[test]
    fn paint_with_color_emits_escapes() {
        let green = paint("x", Tone::Green, true);
        let red = paint("x", Tone::Red, true);
        assert!(green.contains('\u{1b}'));
        assert!(green.contains('x'));
        assert_ne!(green, red);
    }

    #[test]
    fn width_counts_columns() {
        let line = Line::new().push("ab", Tone::Green).push("●─", Tone::Red);
        assert_eq!(line.width(), 4);
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(line.plain_text(), "ab●─");
    }

    #[test]
    fn render_keeps_text_order() {
        let line = Line::new()
            .push("Coins :", Tone::White)
            .push(" 10", Tone::Red);
        assert_eq!(line.render(false), "Coins : 10");
    }

    #[test]
    fn wrap_splits_across_spans() {
        let line = Line::new().push("abcd", Tone::Green).push("efg", Tone::Red);
        let rows = line.wrap(3);
        let texts: Vec<_> = rows.iter().map(Line::plain_text).collect();
        assert_eq!(texts, vec!["abc", "def", "g"]);
        assert_eq!(rows[1].spans()[0].tone, Tone::Green);
        assert_eq!(rows[1].spans()[1].tone, Tone::Red);
    }

    #[test]
    fn wrap_short_and_empty_lines() {
        assert_eq!(Line::plain("ab").wrap(10), vec![Line::plain("ab")]);
        assert_eq!(Line::new().wrap(10), vec![Line::new()]);
    }

    #[test]
    fn wrap_respects_wide_glyphs() {
        let rows = Line::plain("漢字漢").wrap(4);
        let texts: Vec<_> = rows.iter().map(Line::plain_text).collect();
        assert_eq!(texts, vec!["漢字", "漢"]);
    }
}
