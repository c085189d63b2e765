use nexastack::domain::services::DashboardSummary;

use crate::ui::blocks::header::ViewHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate, ColoredText};
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub struct DashboardView<'a> {
    summary: &'a DashboardSummary,
}

impl<'a> DashboardView<'a> {
    pub fn new(summary: &'a DashboardSummary) -> Self {
        Self { summary }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.summary;
        let mut out = String::new();

        let mut header = ViewHeader::new(Icon::Dashboard, "Dashboard");
        header.add("Workspace", s.workspace_name.as_str());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        let mut stats = Box::with_title("Overview").style(BoxStyle::Info);
        stats.add_line(format!("Total projects   {}", s.total_projects));
        stats.add_line(format!("Team members     {}", s.team_members));
        stats.add_line(format!("Environments     {}", s.environments));
        out.push_str(&stats.render(supports_color, supports_unicode));
        out.push('\n');

        if s.recent.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No projects yet. Create one to get started.")
                    .render(supports_color)
            ));
            return out;
        }

        let mut recent = Box::with_title("Recent projects").style(BoxStyle::Info);
        for project in &s.recent {
            let mut team: String = project.member_initials.iter().collect();
            if project.more_members > 0 {
                team.push_str(&format!(" +{}", project.more_members));
            }
            recent.add_line(format!(
                "{} {}  {}",
                ColoredText::plain(truncate(&project.name, 28))
                    .padded(28)
                    .bold()
                    .render(supports_color),
                ColoredText::dim(project.created_at.format("%b %-d, %Y").to_string())
                    .render(supports_color),
                team
            ));
            if !project.description.is_empty() {
                recent.add_line(ColoredText::dim(truncate(&project.description, 60)).render(supports_color));
            }
        }
        out.push_str(&recent.render(supports_color, supports_unicode));
        out
    }
}
