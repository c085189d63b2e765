//! Consistency check command

use anyhow::Result;

use nexastack::domain::services::check_consistency;
use nexastack::presentation::Session;

use crate::ui::context::UiContext;
use crate::ui::views::check::CheckView;

pub fn cmd_check(session: &Session, ui: &UiContext) -> Result<()> {
    let (report, projects) = session
        .store
        .read(|state| (check_consistency(state), state.projects().len()));

    if ui.json() {
        let output = serde_json::json!({
            "event": "check",
            "consistent": report.is_consistent(),
            "projects": projects,
            "issues": report.issues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!(
            "{}",
            CheckView::new(&report, projects).render(ui.color, ui.unicode)
        );
    }

    if !report.is_consistent() {
        tracing::warn!(issues = report.issues.len(), "store is inconsistent");
        std::process::exit(1);
    }
    Ok(())
}
