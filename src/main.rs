//! claude-ext: Claude Code Extensions Manager
//!
//! Copies agent, command, and workflow extension definitions between the
//! bundled catalog and user- or project-level `.claude` directories.

mod catalog;
mod cli;
mod error;
mod report;
mod store;
mod utils;

use anyhow::Result;
use clap::Parser;

use catalog::{Catalog, ExtensionKind};
use cli::{run_action, run_interactive, run_list_projects, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::resolve(cli.extensions_dir.clone());

    match cli.command {
        Commands::Agent { action } => run_action(&catalog, ExtensionKind::Agent, action),
        Commands::Command { action } => run_action(&catalog, ExtensionKind::Command, action),
        Commands::Workflow { action } => run_action(&catalog, ExtensionKind::Workflow, action),
        Commands::ListProjects { json } => run_list_projects(json),
        Commands::Interactive => run_interactive(&catalog),
    }
}
