use nexastack::presentation::output;

use crate::ui::blocks::header::ViewHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct SettingsView<'a> {
    settings: &'a output::SettingsView,
}

impl<'a> SettingsView<'a> {
    pub fn new(settings: &'a output::SettingsView) -> Self {
        Self { settings }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.settings;
        let mut header = ViewHeader::new(Icon::Settings, "Workspace settings");
        header.add("Name", s.workspace_name.as_str());
        header.add("ID", s.workspace_id.as_str());
        header.add(
            "Description",
            s.description
                .clone()
                .unwrap_or_else(|| ColoredText::dim("(none)").render(supports_color)),
        );
        header.add("Members", s.members.to_string());
        header.add("Projects", s.projects.to_string());
        header.render(supports_color, supports_unicode)
    }
}
