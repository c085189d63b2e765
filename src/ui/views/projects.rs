use nexastack::presentation::output::ProjectCard;

use crate::ui::blocks::header::ViewHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate, ColoredText};
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub struct ProjectsView<'a> {
    projects: &'a [ProjectCard],
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a [ProjectCard]) -> Self {
        Self { projects }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let mut header = ViewHeader::new(Icon::Project, "Projects");
        header.add("Projects", self.projects.len().to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.projects.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No projects found.").render(supports_color)
            ));
            return out;
        }

        let mut b = Box::with_title("All projects").style(BoxStyle::Info);
        b.add_line(
            ColoredText::dim(format!(
                "{:<6} {:<28} {:>4} {:>7}  {}",
                "ID", "Name", "Envs", "Members", "Created"
            ))
            .render(supports_color),
        );
        for project in self.projects {
            b.add_line(format!(
                "{:<6} {} {:>4} {:>7}  {}",
                truncate(&project.id, 6),
                ColoredText::plain(truncate(&project.name, 28))
                    .padded(28)
                    .render(supports_color),
                project.environments,
                project.members,
                project.created_at.format("%Y-%m-%d")
            ));
        }
        out.push_str(&b.render(supports_color, supports_unicode));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_hint() {
        let out = ProjectsView::new(&[]).render(false, false);
        assert!(out.contains("[ ] No projects found."));
    }
}
