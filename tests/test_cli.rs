//! Tests for CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use claude_ext::catalog::ExtensionKind;
use claude_ext::cli::{Cli, Commands, ExtAction};

#[test]
fn test_cli_agent_list_defaults() {
    let cli = Cli::parse_from(["claude-ext", "agent", "list"]);

    match cli.command {
        Commands::Agent {
            action:
                ExtAction::List {
                    installed,
                    project,
                    json,
                },
        } => {
            assert!(!installed, "Default listing shows available extensions");
            assert!(project.is_none(), "Default level should be user");
            assert!(!json);
        }
        other => panic!("expected agent list, got {:?}", other),
    }
}

#[test]
fn test_cli_list_installed_with_project() {
    let cli = Cli::parse_from([
        "claude-ext",
        "command",
        "list",
        "--installed",
        "--project",
        "/tmp/my-project",
    ]);

    match cli.command {
        Commands::Command {
            action: ExtAction::List {
                installed, project, ..
            },
        } => {
            assert!(installed);
            assert_eq!(project, Some(PathBuf::from("/tmp/my-project")));
        }
        other => panic!("expected command list, got {:?}", other),
    }
}

#[test]
fn test_cli_install_multiple_names() {
    let cli = Cli::parse_from([
        "claude-ext",
        "agent",
        "install",
        "security-scanner",
        "code-reviewer",
        "-f",
    ]);

    match cli.command {
        Commands::Agent {
            action:
                ExtAction::Install {
                    names,
                    force,
                    interactive,
                    project,
                },
        } => {
            assert_eq!(names, vec!["security-scanner", "code-reviewer"]);
            assert!(force);
            assert!(!interactive);
            assert!(project.is_none());
        }
        other => panic!("expected agent install, got {:?}", other),
    }
}

#[test]
fn test_cli_install_no_names_allowed() {
    // No names means the interactive picker; parsing must accept it.
    let cli = Cli::parse_from(["claude-ext", "command", "install", "-i"]);

    match cli.command {
        Commands::Command {
            action: ExtAction::Install {
                names, interactive, ..
            },
        } => {
            assert!(names.is_empty());
            assert!(interactive);
        }
        other => panic!("expected command install, got {:?}", other),
    }
}

#[test]
fn test_cli_uninstall_requires_name() {
    assert!(Cli::try_parse_from(["claude-ext", "agent", "uninstall"]).is_err());

    let cli = Cli::parse_from([
        "claude-ext",
        "agent",
        "uninstall",
        "code-reviewer",
        "-p",
        "/tmp/app",
    ]);
    match cli.command {
        Commands::Agent {
            action: ExtAction::Uninstall { name, project },
        } => {
            assert_eq!(name, "code-reviewer");
            assert_eq!(project, Some(PathBuf::from("/tmp/app")));
        }
        other => panic!("expected agent uninstall, got {:?}", other),
    }
}

#[test]
fn test_cli_workflow_subcommand() {
    let cli = Cli::parse_from(["claude-ext", "workflow", "install", "release-flow"]);
    assert_eq!(cli.command.kind(), Some(ExtensionKind::Workflow));
}

#[test]
fn test_cli_kind_mapping() {
    let agent = Cli::parse_from(["claude-ext", "agent", "list"]);
    let command = Cli::parse_from(["claude-ext", "command", "list"]);
    let projects = Cli::parse_from(["claude-ext", "list-projects"]);

    assert_eq!(agent.command.kind(), Some(ExtensionKind::Agent));
    assert_eq!(command.command.kind(), Some(ExtensionKind::Command));
    assert_eq!(projects.command.kind(), None);
}

#[test]
fn test_cli_global_extensions_dir() {
    let cli = Cli::parse_from([
        "claude-ext",
        "agent",
        "list",
        "--extensions-dir",
        "/opt/extensions",
    ]);
    assert_eq!(cli.extensions_dir, Some(PathBuf::from("/opt/extensions")));
}

#[test]
fn test_cli_list_projects_json_flag() {
    let cli = Cli::parse_from(["claude-ext", "list-projects", "--json"]);
    match cli.command {
        Commands::ListProjects { json } => assert!(json),
        other => panic!("expected list-projects, got {:?}", other),
    }
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["claude-ext", "plugin", "list"]).is_err());
}
