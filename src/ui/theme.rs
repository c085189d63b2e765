use crossterm::style::{Color, Stylize};
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the NexaStack console.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // View identifiers (used in headers).
    pub const DASHBOARD: &str = "◧";
    pub const PROJECT: &str = "📁";
    pub const MEMBERS: &str = "👥";
    pub const SETTINGS: &str = "⚙";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const DASHBOARD: &str = "[DASH]";
    pub const PROJECT: &str = "[PROJ]";
    pub const MEMBERS: &str = "[TEAM]";
    pub const SETTINGS: &str = "[CONF]";
    pub const CHECK: &str = "[CHECK]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// ConsoleTheme
// ----------------------------------------------------------------------------

/// dialoguer prompts drawn with the console tokens.
///
/// Methods not overridden here fall back to dialoguer's plain defaults.
pub struct ConsoleTheme {
    unicode: bool,
}

impl ConsoleTheme {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn selected_icon(&self) -> &'static str {
        if self.unicode {
            icons::SELECTED
        } else {
            icons_ascii::SELECTED
        }
    }

    pub fn unselected_icon(&self) -> &'static str {
        if self.unicode {
            icons::UNSELECTED
        } else {
            icons_ascii::UNSELECTED
        }
    }

    fn cursor(&self, active: bool) -> &'static str {
        match (active, self.unicode) {
            (false, _) => " ",
            (true, true) => "›",
            (true, false) => ">",
        }
    }
}

impl Theme for ConsoleTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{} {}", "?".with(colors::INFO), prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        let icon = if self.unicode {
            icons::ERROR
        } else {
            icons_ascii::ERROR
        };
        write!(f, "{} {}", icon.with(colors::ERROR), err)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.cursor(true), text.with(colors::INFO))
        } else {
            write!(f, "{} {}", self.cursor(false), text)
        }
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let icon = if checked {
            self.selected_icon()
        } else {
            self.unselected_icon()
        };
        write!(f, "{} {} {}", self.cursor(active), icon, text)
    }
}
