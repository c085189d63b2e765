use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Dashboard,
    Project,
    Members,
    Settings,
    Check,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Dashboard) => theme::icons::DASHBOARD,
            (true, Icon::Project) => theme::icons::PROJECT,
            (true, Icon::Members) => theme::icons::MEMBERS,
            (true, Icon::Settings) => theme::icons::SETTINGS,
            (true, Icon::Check) => theme::icons::CHECK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Dashboard) => theme::icons_ascii::DASHBOARD,
            (false, Icon::Project) => theme::icons_ascii::PROJECT,
            (false, Icon::Members) => theme::icons_ascii::MEMBERS,
            (false, Icon::Settings) => theme::icons_ascii::SETTINGS,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Dashboard | Icon::Project | Icon::Members | Icon::Settings | Icon::Check => {
                theme::colors::INFO
            }
        };
        format!("{}", s.with(color))
    }
}
