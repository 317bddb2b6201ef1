//! Guided interactive mode: pick a kind, pick an action, pick items,
//! pick a level, confirm, execute, repeat.
//!
//! Per-item install failures are reported in the summary and keep the
//! loop alive; only prompt/terminal errors abort the session.

use anyhow::Result;
use console::style;

use crate::catalog::{Catalog, ExtensionKind};
use crate::cli::commands::{
    run_install, run_list_available, run_list_installed, run_list_projects, run_uninstall,
    selection_label,
};
use crate::cli::prompts;
use crate::store;
use crate::utils::{print_banner, print_warning};

pub fn run_interactive(catalog: &Catalog) -> Result<()> {
    prompts::require_tty()?;
    print_banner(env!("CARGO_PKG_VERSION"));

    loop {
        let choice = prompts::select(
            "What would you like to manage?",
            &["Agents", "Commands", "Workflows", "Known projects", "Quit"],
        )?;
        match choice {
            0 => manage_kind(catalog, ExtensionKind::Agent)?,
            1 => manage_kind(catalog, ExtensionKind::Command)?,
            2 => manage_kind(catalog, ExtensionKind::Workflow)?,
            3 => run_list_projects(false)?,
            _ => break,
        }

        if !prompts::confirm("Continue with another operation?", true)? {
            break;
        }
    }

    println!("  {}", style("Goodbye!").yellow());
    Ok(())
}

fn manage_kind(catalog: &Catalog, kind: ExtensionKind) -> Result<()> {
    let action = prompts::select(
        &format!("What would you like to do with {}?", kind.plural()),
        &[
            "List available",
            "List installed",
            "Install",
            "Uninstall",
            "Back",
        ],
    )?;

    match action {
        0 => run_list_available(catalog, kind, false),
        1 => {
            let level = prompts::select_level("List installed")?;
            run_list_installed(catalog, kind, &level, false)
        }
        2 => install_flow(catalog, kind),
        3 => uninstall_flow(catalog, kind),
        _ => Ok(()),
    }
}

fn install_flow(catalog: &Catalog, kind: ExtensionKind) -> Result<()> {
    let available = catalog.list(kind)?;
    if available.is_empty() {
        print_warning(&format!("No {} available to install", kind.plural()));
        return Ok(());
    }

    let labels: Vec<String> = available.iter().map(selection_label).collect();
    let chosen = prompts::multi_select(
        &format!("Select {} to install", kind.plural()),
        &labels,
    )?;
    if chosen.is_empty() {
        print_warning("No items selected");
        return Ok(());
    }

    let names: Vec<String> = chosen
        .into_iter()
        .map(|i| available[i].name.clone())
        .collect();
    println!(
        "\n  Selected {} {}:",
        style(names.len()).cyan().bold(),
        kind.plural()
    );
    for name in &names {
        println!("    • {}", style(name).green());
    }

    let level = prompts::select_level("Install")?;
    let force = prompts::confirm("Overwrite files that are already installed?", false)?;
    if !prompts::confirm(
        &format!("Proceed with installation of {} item(s)?", names.len()),
        true,
    )? {
        print_warning("Installation cancelled");
        return Ok(());
    }

    // A batch where nothing succeeded surfaces as Err; the summary has
    // already explained it, so stay in the loop.
    if let Err(e) = run_install(catalog, kind, &names, &level, force) {
        print_warning(&e.to_string());
    }
    Ok(())
}

fn uninstall_flow(catalog: &Catalog, kind: ExtensionKind) -> Result<()> {
    let level = prompts::select_level("Uninstall")?;

    let names: Vec<String> = if kind == ExtensionKind::Workflow {
        catalog
            .list(ExtensionKind::Workflow)?
            .into_iter()
            .map(|ext| ext.name)
            .collect()
    } else {
        store::list_installed(kind, &level)?
            .into_iter()
            .map(|item| item.name)
            .collect()
    };

    if names.is_empty() {
        print_warning(&format!(
            "No {} installed at {} level",
            kind.plural(),
            level.label()
        ));
        return Ok(());
    }

    let choice = prompts::select(
        &format!("Select the {} to uninstall", kind.label()),
        &names.iter().map(String::as_str).collect::<Vec<_>>(),
    )?;
    let name = &names[choice];

    if !prompts::confirm(&format!("Uninstall '{}'?", name), false)? {
        print_warning("Uninstall cancelled");
        return Ok(());
    }

    if let Err(e) = run_uninstall(catalog, kind, name, &level) {
        print_warning(&e.to_string());
    }
    Ok(())
}
