use nexastack::presentation::output::MemberRow;

use crate::ui::blocks::header::ViewHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate, ColoredText};
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub struct MembersView<'a> {
    workspace_name: &'a str,
    members: &'a [MemberRow],
}

impl<'a> MembersView<'a> {
    pub fn new(workspace_name: &'a str, members: &'a [MemberRow]) -> Self {
        Self {
            workspace_name,
            members,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = ViewHeader::new(Icon::Members, "Members");
        header.add("Workspace", self.workspace_name);
        header.add("Members", self.members.len().to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let mut b = Box::with_title("Team").style(BoxStyle::Info);
        for member in self.members {
            let role = ColoredText::plain(member.role.as_str()).padded(7);
            let role = if member.removable {
                role.render(supports_color)
            } else {
                ColoredText::warning(role.to_string()).render(supports_color)
            };
            b.add_line(format!(
                "({}) {} {} {}",
                member.initial,
                ColoredText::plain(truncate(&member.name, 24)).padded(24).bold().render(supports_color),
                role,
                ColoredText::dim(member.email.as_str()).render(supports_color)
            ));
        }
        out.push_str(&b.render(supports_color, supports_unicode));
        out
    }
}
