use nexastack::domain::services::ConsistencyReport;

use crate::ui::blocks::header::ViewHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct CheckView<'a> {
    report: &'a ConsistencyReport,
    projects: usize,
}

impl<'a> CheckView<'a> {
    pub fn new(report: &'a ConsistencyReport, projects: usize) -> Self {
        Self { report, projects }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let mut header = ViewHeader::new(Icon::Check, "Consistency check");
        header.add("Projects", self.projects.to_string());
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push('\n');

        if self.report.is_consistent() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success("All copies agree").render(supports_color)
            ));
            return out;
        }

        for issue in &self.report.issues {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                issue
            ));
        }
        out.push_str(&format!(
            "\n{}\n",
            ColoredText::error(format!("{} issue(s) found", self.report.issues.len()))
                .render(supports_color)
        ));
        out
    }
}
