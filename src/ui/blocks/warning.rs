use nexastack::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// One line per unknown config key.
    pub fn config_warnings(warnings: &[ConfigWarning]) -> Self {
        let mut block = Self::new("Config warnings");
        for warning in warnings {
            block.add_line(warning.to_string());
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        for line in &self.lines {
            b.add_line(line.clone());
        }
        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lists_each_config_warning() {
        let warnings = vec![ConfigWarning {
            key: "colr".to_string(),
            file: PathBuf::from("nexastack.toml"),
            line: Some(3),
            suggestion: Some("color".to_string()),
        }];
        let rendered = WarningBlock::config_warnings(&warnings).render(false, false);
        assert!(rendered.contains("[WARN] Config warnings"));
        assert!(rendered.contains("unknown config key 'colr' in nexastack.toml:3"));
    }
}
