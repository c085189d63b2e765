//! Integration tests for the read-only view commands.

mod common;

use tempfile::tempdir;

use common::{run, run_with_env, stdout};

fn json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn projects_json_lists_demo_projects() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["--json", "projects"]);
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(value["view"], "projects");
    let names: Vec<&str> = value["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["NexaStack AI", "Automation Workflow"]);
}

#[test]
fn project_json_has_permission_grid() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["project", "1", "--json"]);
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(value["view"], "project-details");
    assert_eq!(value["access"]["columns"].as_array().unwrap().len(), 3);
    assert_eq!(value["access"]["rows"][0]["name"], "Sarah Chen");
    assert_eq!(value["access"]["rows"][0]["cells"][2], "full-access");
}

#[test]
fn unknown_project_exits_non_zero() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["--json", "project", "404"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json(&output)["view"], "project-not-found");
}

#[test]
fn open_resolves_paths() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["--json", "open", "/settings/"]);
    assert!(output.status.success());
    assert_eq!(json(&output)["workspaceName"], "NexaStack");

    let output = run(dir.path(), &["--json", "open", "/nowhere"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json(&output)["path"], "/nowhere");
}

#[test]
fn dashboard_text_shows_counts() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["dashboard", "--color", "never"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Dashboard"));
    assert!(text.contains("Workspace: NexaStack"));
    assert!(text.contains("Total projects   2"));
    assert!(text.contains("Environments     6"));
}

#[test]
fn members_text_lists_owner() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["members"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Sarah Chen"));
    assert!(text.contains("sc@example.com"));
}

#[test]
fn unseeded_session_has_no_workspace() {
    let dir = tempdir().unwrap();
    let output = run_with_env(dir.path(), &["--json", "dashboard"], &[("NEXASTACK_SEED", "false")]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json(&output)["view"], "no-workspace");
}

#[test]
fn no_subcommand_without_tty_prints_dashboard() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["--json"]);
    assert!(output.status.success());
    assert_eq!(json(&output)["view"], "dashboard");
}
