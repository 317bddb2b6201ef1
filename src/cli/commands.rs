//! Command handlers wiring the catalog, the install store, and the report
//! renderings together.

use anyhow::Result;
use console::style;

use crate::catalog::{resolve_workflow, Catalog, Extension, ExtensionKind, WorkflowSpec};
use crate::cli::args::ExtAction;
use crate::error::ExtError;
use crate::report::{
    available_table, installed_table, print_json, print_table, projects_table, table_title,
    workflow_table, InstallSummary,
};
use crate::store::{self, BatchOutcome, InstallLevel};
use crate::utils::{
    create_install_bar, create_spinner, print_error, print_hint, print_install_card,
    print_location, print_success, print_warning,
};

/// Dispatch a `claude-ext <kind> <action>` invocation.
pub fn run_action(catalog: &Catalog, kind: ExtensionKind, action: ExtAction) -> Result<()> {
    match action {
        ExtAction::List {
            installed,
            project,
            json,
        } => {
            let level = InstallLevel::from_project_flag(project);
            if installed {
                run_list_installed(catalog, kind, &level, json)
            } else {
                run_list_available(catalog, kind, json)
            }
        }
        ExtAction::Install {
            names,
            project,
            force,
            interactive,
        } => {
            let level = InstallLevel::from_project_flag(project);
            if interactive || names.is_empty() {
                run_install_picker(catalog, kind, &level, force)
            } else {
                run_install(catalog, kind, &names, &level, force)
            }
        }
        ExtAction::Uninstall { name, project } => {
            let level = InstallLevel::from_project_flag(project);
            run_uninstall(catalog, kind, &name, &level)
        }
    }
}

/// List what the catalog offers for a kind.
pub fn run_list_available(catalog: &Catalog, kind: ExtensionKind, json: bool) -> Result<()> {
    let available = catalog.list(kind)?;
    if json {
        return print_json(&available);
    }

    if available.is_empty() {
        print_warning(&format!("No {} available", kind.plural()));
        return Ok(());
    }

    let table = match kind {
        ExtensionKind::Workflow => workflow_table(&with_member_counts(available)),
        _ => available_table(&available),
    };
    print_table(&table_title(kind, false, None), &table);
    print_hint(&format!(
        "Install with: claude-ext {} install <name>",
        kind.label()
    ));
    Ok(())
}

/// List what is installed at a level for a kind.
pub fn run_list_installed(
    catalog: &Catalog,
    kind: ExtensionKind,
    level: &InstallLevel,
    json: bool,
) -> Result<()> {
    if kind == ExtensionKind::Workflow {
        return run_list_installed_workflows(catalog, level, json);
    }

    let installed = store::list_installed(kind, level)?;
    if json {
        return print_json(&installed);
    }

    if installed.is_empty() {
        print_warning(&format!(
            "No {} installed at {} level",
            kind.plural(),
            level.label()
        ));
        return Ok(());
    }

    print_table(
        &table_title(kind, true, Some(level.label())),
        &installed_table(&installed),
    );
    Ok(())
}

/// Workflows are recipes, so "installed" means every member file is
/// present at the level.
fn run_list_installed_workflows(
    catalog: &Catalog,
    level: &InstallLevel,
    json: bool,
) -> Result<()> {
    let mut installed = Vec::new();
    for ext in catalog.list(ExtensionKind::Workflow)? {
        let Ok(bundle) = resolve_workflow(catalog, &ext.name) else {
            continue;
        };
        let mut complete = true;
        for member in &bundle.members {
            if !store::is_installed(member.kind, &member.name, level)? {
                complete = false;
                break;
            }
        }
        if complete {
            installed.push((ext, bundle.members.len()));
        }
    }

    if json {
        let names: Vec<&Extension> = installed.iter().map(|(ext, _)| ext).collect();
        return print_json(&names);
    }

    if installed.is_empty() {
        print_warning(&format!(
            "No workflows fully installed at {} level",
            level.label()
        ));
        return Ok(());
    }

    print_table(
        &table_title(ExtensionKind::Workflow, true, Some(level.label())),
        &workflow_table(&installed),
    );
    Ok(())
}

/// Install the named extensions: single-item path for one markdown
/// extension, batch path otherwise.
pub fn run_install(
    catalog: &Catalog,
    kind: ExtensionKind,
    names: &[String],
    level: &InstallLevel,
    force: bool,
) -> Result<()> {
    if kind == ExtensionKind::Workflow {
        for name in names {
            install_workflow(catalog, name, level, force)?;
        }
        return Ok(());
    }

    if let [name] = names {
        return install_single(catalog, kind, name, level, force);
    }
    install_batch(catalog, kind, names, level, force)
}

/// Multi-select over the available set, then the batch path.
fn run_install_picker(
    catalog: &Catalog,
    kind: ExtensionKind,
    level: &InstallLevel,
    force: bool,
) -> Result<()> {
    use crate::cli::prompts;

    prompts::require_tty()?;
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
        print_warning(&format!("No {} selected", kind.plural()));
        return Ok(());
    }

    let names: Vec<String> = chosen
        .into_iter()
        .map(|i| available[i].name.clone())
        .collect();
    run_install(catalog, kind, &names, level, force)
}

fn install_single(
    catalog: &Catalog,
    kind: ExtensionKind,
    name: &str,
    level: &InstallLevel,
    force: bool,
) -> Result<()> {
    let ext = match catalog.find(kind, name) {
        Ok(ext) => ext,
        Err(e) => {
            print_error(&format!("{} '{}' not found", capitalized(kind), name));
            print_hint(&format!(
                "Run 'claude-ext {} list' to see available {}",
                kind.label(),
                kind.plural()
            ));
            return Err(e.into());
        }
    };

    match store::install(&ext, level, force) {
        Ok(installed) => {
            let verb = if installed.replaced {
                "Reinstalled"
            } else {
                "Installed"
            };
            print_success(&format!(
                "{} {} '{}' to {} level",
                verb,
                kind.label(),
                name,
                level.label()
            ));
            print_location(&installed.path);
            Ok(())
        }
        Err(e @ ExtError::AlreadyInstalled { .. }) => {
            print_warning(&format!("{} '{}' already installed", capitalized(kind), name));
            print_hint("Use --force to overwrite");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn install_batch(
    catalog: &Catalog,
    kind: ExtensionKind,
    names: &[String],
    level: &InstallLevel,
    force: bool,
) -> Result<()> {
    let mut resolved = Vec::new();
    let mut missing: Vec<(String, ExtError)> = Vec::new();
    for name in names {
        match catalog.find(kind, name) {
            Ok(ext) => resolved.push(ext),
            Err(e) => missing.push((name.clone(), e)),
        }
    }

    print_install_card(names.len(), kind.plural(), level.label(), &level.claude_dir()?);
    let mut outcome = install_with_progress(&resolved, level, force);
    outcome.failed.extend(missing);

    let summary = InstallSummary::from_outcome(kind.plural(), names.len(), outcome);
    summary.display();
    if summary.all_failed() {
        anyhow::bail!("no {} were installed", kind.plural());
    }
    Ok(())
}

fn install_workflow(
    catalog: &Catalog,
    name: &str,
    level: &InstallLevel,
    force: bool,
) -> Result<()> {
    let bundle = match resolve_workflow(catalog, name) {
        Ok(bundle) => bundle,
        Err(e) => {
            print_error(&format!("Cannot install workflow '{}': {}", name, e));
            if matches!(e, ExtError::NotFound { .. }) {
                print_hint("Run 'claude-ext workflow list' to see available workflows");
            }
            return Err(e.into());
        }
    };

    println!(
        "\n  {} Workflow '{}'{}",
        style("◆").cyan().bold(),
        style(name).bold(),
        bundle
            .spec
            .description
            .as_deref()
            .map(|d| format!(": {}", d))
            .unwrap_or_default()
    );
    print_install_card(
        bundle.members.len(),
        "member(s)",
        level.label(),
        &level.claude_dir()?,
    );

    let requested = bundle.members.len();
    let outcome = install_with_progress(&bundle.members, level, force);
    let summary = InstallSummary::from_outcome("workflow members", requested, outcome);
    summary.display();
    if summary.all_failed() {
        anyhow::bail!("no members of workflow '{}' were installed", name);
    }
    Ok(())
}

/// Drive the store's batch install under a progress bar, echoing one line
/// per item.
fn install_with_progress(
    extensions: &[Extension],
    level: &InstallLevel,
    force: bool,
) -> BatchOutcome {
    let pb = create_install_bar(extensions.len() as u64);
    let outcome = store::install_many(extensions, level, force, |ext, result| {
        match result {
            Ok(installed) if installed.replaced => pb.println(format!(
                "  {} {}: overwritten",
                style("♻").yellow(),
                ext.name
            )),
            Ok(_) => pb.println(format!(
                "  {} {}: installed",
                style("✓").green(),
                ext.name
            )),
            Err(e) => pb.println(format!("  {} {}: {}", style("✗").red(), ext.name, e)),
        }
        pb.inc(1);
    });
    pb.finish_and_clear();
    outcome
}

/// Uninstall one extension, or every member of a workflow bundle.
pub fn run_uninstall(
    catalog: &Catalog,
    kind: ExtensionKind,
    name: &str,
    level: &InstallLevel,
) -> Result<()> {
    if kind == ExtensionKind::Workflow {
        return uninstall_workflow(catalog, name, level);
    }

    match store::uninstall(kind, name, level) {
        Ok(removed) => {
            print_success(&format!("Uninstalled {} '{}'", kind.label(), name));
            print_location(&removed);
            Ok(())
        }
        Err(e @ ExtError::NotInstalled { .. }) => {
            print_error(&format!(
                "{} '{}' not found at {} level",
                capitalized(kind),
                name,
                level.label()
            ));
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn uninstall_workflow(catalog: &Catalog, name: &str, level: &InstallLevel) -> Result<()> {
    let bundle = resolve_workflow(catalog, name)?;

    let mut removed = 0usize;
    for member in &bundle.members {
        match store::uninstall(member.kind, &member.name, level) {
            Ok(_) => {
                print_success(&format!(
                    "Removed {} '{}'",
                    member.kind.label(),
                    member.name
                ));
                removed += 1;
            }
            Err(ExtError::NotInstalled { .. }) => {
                print_warning(&format!(
                    "{} '{}' was not installed",
                    capitalized(member.kind),
                    member.name
                ));
            }
            Err(e) => return Err(e.into()),
        }
    }

    if removed == 0 {
        anyhow::bail!(
            "workflow '{}' is not installed at {} level",
            name,
            level.label()
        );
    }
    print_success(&format!(
        "Uninstalled workflow '{}' ({} file(s) removed)",
        name, removed
    ));
    Ok(())
}

/// Handle `claude-ext list-projects`.
pub fn run_list_projects(json: bool) -> Result<()> {
    let claude_dir = InstallLevel::User.claude_dir()?;

    // Path reconstruction probes the filesystem per entry, which can take
    // a moment on large project registries.
    let spinner = create_spinner("Scanning known projects...");
    let projects = store::list_known_projects(&claude_dir)?;
    spinner.finish_and_clear();

    if json {
        return print_json(&projects);
    }

    if projects.is_empty() {
        print_warning("No known projects found");
        print_hint(&format!(
            "Looked in {}",
            claude_dir.join("projects").display()
        ));
        return Ok(());
    }

    print_table("Known Projects", &projects_table(&projects));
    print_hint("Paths are reconstructed best-effort from directory names");
    Ok(())
}

/// Member count for a workflow listing row; unparseable files list as 0.
fn with_member_counts(workflows: Vec<Extension>) -> Vec<(Extension, usize)> {
    workflows
        .into_iter()
        .map(|ext| {
            let count = WorkflowSpec::load(&ext.path)
                .map(|spec| spec.member_names().len())
                .unwrap_or(0);
            (ext, count)
        })
        .collect()
}

/// "name (description)" labels for selection prompts.
pub(crate) fn selection_label(ext: &Extension) -> String {
    match &ext.description {
        Some(description) => format!(
            "{} ({})",
            ext.name,
            crate::utils::truncate_string(description, 48)
        ),
        None => ext.name.clone(),
    }
}

fn capitalized(kind: ExtensionKind) -> String {
    let label = kind.label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
