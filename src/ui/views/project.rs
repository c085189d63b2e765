use nexastack::domain::value_objects::PermissionLevel;
use nexastack::presentation::output::ProjectDetails;

use crate::ui::blocks::header::ViewHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate, ColoredText};
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub struct ProjectView<'a> {
    details: &'a ProjectDetails,
}

impl<'a> ProjectView<'a> {
    pub fn new(details: &'a ProjectDetails) -> Self {
        Self { details }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let d = self.details;
        let mut out = String::new();

        let mut header = ViewHeader::new(Icon::Project, d.name.as_str());
        header.add("ID", d.id.as_str());
        header.add("Created", d.created_at.format("%Y-%m-%d").to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        if !d.description.is_empty() {
            out.push_str(&format!("{}\n", d.description));
        }
        out.push('\n');

        let mut envs = Box::with_title("Environments").style(BoxStyle::Info);
        if d.environments.is_empty() {
            envs.add_line(ColoredText::dim("No environments").render(supports_color));
        }
        for env in &d.environments {
            envs.add_line(format!(
                "{} {}",
                ColoredText::plain(env.name.as_str()).padded(12).bold().render(supports_color),
                ColoredText::dim(env.name.description()).render(supports_color)
            ));
        }
        out.push_str(&envs.render(supports_color, supports_unicode));
        out.push('\n');

        let mut grid = Box::with_title("Access").style(BoxStyle::Info);
        let mut heading = format!("{:<24} {:<8}", "Member", "Role");
        for column in &d.access.columns {
            heading.push_str(&format!(" {:<11}", column.kind.short_label()));
        }
        grid.add_line(ColoredText::dim(heading).render(supports_color));
        for row in &d.access.rows {
            let mut line = format!(
                "{} {:<8}",
                ColoredText::plain(truncate(&row.name, 24)).padded(24).render(supports_color),
                row.role.as_str()
            );
            for cell in &row.cells {
                line.push(' ');
                line.push_str(&permission_cell(*cell, supports_color));
            }
            grid.add_line(line);
        }
        out.push_str(&grid.render(supports_color, supports_unicode));
        out
    }
}

fn permission_cell(level: Option<PermissionLevel>, supports_color: bool) -> String {
    let text = match level {
        Some(level) => ColoredText::plain(level.as_str()).padded(11),
        None => ColoredText::plain("no access").padded(11),
    };
    let text = match level {
        Some(PermissionLevel::FullAccess) => ColoredText::success(text.to_string()),
        Some(PermissionLevel::ReadWrite) => ColoredText::info(text.to_string()),
        Some(PermissionLevel::ReadOnly) => ColoredText::warning(text.to_string()),
        None => ColoredText::dim(text.to_string()),
    };
    text.render(supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexastack::domain::services::find_project;
    use nexastack::infrastructure::{seed_demo_state_with, FixedClock};

    #[test]
    fn lists_environments_and_permission_grid() {
        let state = seed_demo_state_with(&FixedClock::epoch());
        let project = find_project(&state, "1").expect("seeded project");
        let details = ProjectDetails::from(project);
        let out = ProjectView::new(&details).render(false, false);

        assert!(out.starts_with("[PROJ] NexaStack AI\nID: 1\n"));
        assert!(out.contains("development"));
        assert!(out.contains("Live production environment"));
        let heading = out
            .lines()
            .find(|l| l.contains("Member"))
            .expect("grid heading");
        let cols: Vec<&str> = heading.split_whitespace().collect();
        assert_eq!(cols[1..6], ["Member", "Role", "dev", "sta", "pro"]);
        assert!(out.contains("Sarah Chen"));
        assert!(out.contains("full-access"));
    }

    #[test]
    fn missing_permission_reads_no_access() {
        assert_eq!(permission_cell(None, false), "no access  ");
    }
}
