//! End-to-end tests running the claude-ext binary against temp directories

mod common;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use claude_ext::store::encode_project_path;
use common::create_source_tree;

/// Binary invocation with the catalog and home directory pinned to fixtures.
fn claude_ext(source: &Path, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("claude-ext").expect("binary should build");
    cmd.env("CLAUDE_EXT_DIR", source).env("HOME", home);
    cmd
}

#[test]
fn test_agent_list_shows_available() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Agents"))
        .stdout(predicate::str::contains("code-reviewer"))
        .stdout(predicate::str::contains("Reviews diffs for defects"));
}

#[test]
fn test_agent_list_empty_catalog() {
    let source = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No agents available"));
}

#[test]
fn test_install_to_user_level() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "code-reviewer"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Installed agent 'code-reviewer' to user level",
        ));

    let installed = home.path().join(".claude/agents/code-reviewer.md");
    assert!(installed.is_file());

    let original = fs::read(source.path().join("agents/code-reviewer.md")).unwrap();
    assert_eq!(fs::read(&installed).unwrap(), original);
}

#[test]
fn test_double_install_requires_force() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "code-reviewer"])
        .assert()
        .success();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "code-reviewer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already installed"));

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "code-reviewer", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reinstalled"));
}

#[test]
fn test_install_unknown_agent_fails() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_install_to_project_level() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["command", "install", "smart-commit", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("project level"));

    assert!(project
        .path()
        .join(".claude/commands/smart-commit.md")
        .is_file());
    assert!(
        !home.path().join(".claude").exists(),
        "User level must be untouched by a project install"
    );
}

#[test]
fn test_batch_install_reports_summary() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["command", "install", "changelog", "smart-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INSTALL SUMMARY"));

    assert!(home.path().join(".claude/commands/changelog.md").is_file());
    assert!(home
        .path()
        .join(".claude/commands/smart-commit.md")
        .is_file());
}

#[test]
fn test_batch_install_fails_when_nothing_succeeds() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "ghost", "phantom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no agents were installed"));
}

#[test]
fn test_uninstall_and_repeat() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "code-reviewer"])
        .assert()
        .success();

    claude_ext(source.path(), home.path())
        .args(["agent", "uninstall", "code-reviewer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled agent 'code-reviewer'"));
    assert!(!home.path().join(".claude/agents/code-reviewer.md").exists());

    claude_ext(source.path(), home.path())
        .args(["agent", "uninstall", "code-reviewer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

#[test]
fn test_list_installed_after_install() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["agent", "install", "security-scanner"])
        .assert()
        .success();

    claude_ext(source.path(), home.path())
        .args(["agent", "list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed Agents (user level)"))
        .stdout(predicate::str::contains("security-scanner"));
}

#[test]
fn test_list_json_output() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    let output = claude_ext(source.path(), home.path())
        .args(["agent", "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["code-reviewer", "doc-writer", "security-scanner"]);
}

#[test]
fn test_workflow_install_copies_members() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["workflow", "install", "release-flow", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow 'release-flow'"))
        .stdout(predicate::str::contains("INSTALL SUMMARY"));

    let claude = project.path().join(".claude");
    for file in [
        "commands/smart-commit.md",
        "commands/changelog.md",
        "agents/code-reviewer.md",
        "agents/security-scanner.md",
    ] {
        assert!(claude.join(file).is_file(), "missing member {}", file);
    }
}

#[test]
fn test_workflow_uninstall_removes_members() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .args(["workflow", "install", "release-flow", "--project"])
        .arg(project.path())
        .assert()
        .success();

    claude_ext(source.path(), home.path())
        .args(["workflow", "uninstall", "release-flow", "--project"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled workflow 'release-flow'"));

    assert!(!project
        .path()
        .join(".claude/commands/smart-commit.md")
        .exists());
}

#[test]
fn test_list_projects_decodes_paths() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    let live = home.path().join("dev").join("my-app");
    fs::create_dir_all(&live).unwrap();
    let projects_dir = home.path().join(".claude/projects");
    fs::create_dir_all(projects_dir.join(encode_project_path(&live))).unwrap();

    claude_ext(source.path(), home.path())
        .args(["list-projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Known Projects"))
        .stdout(predicate::str::contains(live.display().to_string()));
}

#[test]
fn test_interactive_requires_terminal() {
    let source = create_source_tree();
    let home = tempfile::tempdir().unwrap();

    claude_ext(source.path(), home.path())
        .arg("interactive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
