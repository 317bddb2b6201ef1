//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::ExtensionKind;

/// claude-ext - Manage Claude Code agent, command, and workflow extensions
#[derive(Parser, Debug)]
#[command(name = "claude-ext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the bundled extensions directory.
    /// Defaults to 'extensions/' next to the executable.
    #[arg(long, global = true, env = "CLAUDE_EXT_DIR", value_name = "DIR")]
    pub extensions_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Claude Code agents
    Agent {
        #[command(subcommand)]
        action: ExtAction,
    },
    /// Manage Claude Code commands
    Command {
        #[command(subcommand)]
        action: ExtAction,
    },
    /// Manage workflow bundles (a command plus its supporting extensions)
    Workflow {
        #[command(subcommand)]
        action: ExtAction,
    },
    /// List projects known to Claude Code, with reconstructed paths
    ListProjects {
        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Interactive mode for managing extensions
    Interactive,
}

#[allow(dead_code)]
impl Commands {
    /// The extension kind a subcommand operates on, when it has one.
    pub fn kind(&self) -> Option<ExtensionKind> {
        match self {
            Commands::Agent { .. } => Some(ExtensionKind::Agent),
            Commands::Command { .. } => Some(ExtensionKind::Command),
            Commands::Workflow { .. } => Some(ExtensionKind::Workflow),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ExtAction {
    /// List available or installed extensions
    List {
        /// Show installed extensions instead of available ones
        #[arg(short, long)]
        installed: bool,

        /// Project path (if not specified, the user level is used)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Install one or more extensions
    Install {
        /// Extension name(s) to install (space-separated for multiple).
        /// With no names, opens the interactive multi-select.
        names: Vec<String>,

        /// Project path (if not specified, installs to user level)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Overwrite if already installed
        #[arg(short, long)]
        force: bool,

        /// Interactive multi-select mode
        #[arg(short, long)]
        interactive: bool,
    },

    /// Uninstall an extension
    Uninstall {
        /// Extension name to uninstall
        name: String,

        /// Project path (if not specified, uninstalls from user level)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
}
