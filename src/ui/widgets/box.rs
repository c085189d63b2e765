use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl BoxStyle {
    fn color(self) -> crossterm::style::Color {
        match self {
            BoxStyle::Info => theme::colors::INFO,
            BoxStyle::Success => theme::colors::SUCCESS,
            BoxStyle::Warning => theme::colors::WARNING,
            BoxStyle::Error => theme::colors::ERROR,
        }
    }
}

/// A bordered panel sized to its widest row, with the title set into the
/// top edge: `╭─ Title ───╮`.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    rows: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Embedded newlines start new rows.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.rows
            .extend(line.into().lines().map(str::to_string));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (corners, horizontal, vertical) = if supports_unicode {
            use theme::borders as b;
            (
                [b::TOP_LEFT, b::TOP_RIGHT, b::BOTTOM_LEFT, b::BOTTOM_RIGHT],
                b::HORIZONTAL,
                b::VERTICAL,
            )
        } else {
            use theme::borders_ascii as b;
            (
                [b::TOP_LEFT, b::TOP_RIGHT, b::BOTTOM_LEFT, b::BOTTOM_RIGHT],
                b::HORIZONTAL,
                b::VERTICAL,
            )
        };
        let paint = |s: String| {
            if supports_color {
                format!("{}", s.with(self.style.color()))
            } else {
                s
            }
        };

        let title_width = self.title.as_deref().map(visible_width);
        let content_width = self.rows.iter().map(|r| visible_width(r)).max().unwrap_or(0);
        // One space either side of the content; the title needs `─ ` + ` ─`.
        let inner = (content_width + 2).max(title_width.map_or(0, |w| w + 4));

        let mut out = String::new();
        match &self.title {
            Some(title) => {
                let fill = inner - title_width.unwrap_or(0) - 3;
                out.push_str(&paint(format!("{}{} ", corners[0], horizontal)));
                out.push_str(title);
                out.push_str(&paint(format!(" {}{}", horizontal.repeat(fill), corners[1])));
            }
            None => out.push_str(&paint(format!(
                "{}{}{}",
                corners[0],
                horizontal.repeat(inner),
                corners[1]
            ))),
        }
        out.push('\n');

        for row in &self.rows {
            let pad = inner - 1 - visible_width(row);
            out.push_str(&paint(vertical.to_string()));
            out.push(' ');
            out.push_str(row);
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(vertical.to_string()));
            out.push('\n');
        }

        out.push_str(&paint(format!(
            "{}{}{}",
            corners[2],
            horizontal.repeat(inner),
            corners[3]
        )));
        out.push('\n');
        out
    }
}

/// Display columns, not counting ANSI escape sequences.
pub(crate) fn visible_width(s: &str) -> usize {
    if !s.contains('\u{1b}') {
        return s.width();
    }

    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (false, c) => plain.push(c),
            // CSI parameters and intermediates; a letter ends the sequence.
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
            (true, _) => {}
        }
    }
    plain.width()
}
