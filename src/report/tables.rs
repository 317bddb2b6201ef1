//! Table renderings for listings

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};

use crate::catalog::{Extension, ExtensionKind};
use crate::store::{InstalledExtension, KnownProject};
use crate::utils::truncate_string;

/// Table of catalog extensions with their descriptions.
pub fn available_table(extensions: &[Extension]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for ext in extensions {
        let description = ext.description.as_deref().unwrap_or("-");
        table.add_row(vec![
            Cell::new(&ext.name).fg(Color::Green),
            Cell::new(truncate_string(description, 60)),
        ]);
    }

    table
}

/// Table of installed extensions with location and install time.
pub fn installed_table(items: &[InstalledExtension]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Installed").add_attribute(Attribute::Bold),
        Cell::new("Location").add_attribute(Attribute::Bold),
    ]);

    for item in items {
        let modified = item
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&item.name).fg(Color::Green),
            Cell::new(modified),
            Cell::new(item.path.display()),
        ]);
    }

    table
}

/// Table of workflow bundles with member counts.
pub fn workflow_table(workflows: &[(Extension, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Members").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for (ext, members) in workflows {
        let description = ext.description.as_deref().unwrap_or("-");
        table.add_row(vec![
            Cell::new(&ext.name).fg(Color::Green),
            Cell::new(members),
            Cell::new(truncate_string(description, 50)),
        ]);
    }

    table
}

/// Table of known projects with reconstructed paths.
pub fn projects_table(projects: &[KnownProject]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Directory").add_attribute(Attribute::Bold),
        Cell::new("Project Path").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for project in projects {
        let status = if project.exists {
            Cell::new("present").fg(Color::Green)
        } else {
            Cell::new("missing").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&project.dir_name),
            Cell::new(project.path.display()),
            status,
        ]);
    }

    table
}

/// Print a titled table the way every listing command does.
pub fn print_table(title: &str, table: &Table) {
    println!();
    println!("  {}", console::style(title).white().bold());
    for line in table.to_string().lines() {
        println!("  {}", line);
    }
    println!();
}

/// Title line for a listing, e.g. "Installed Agents (user level)".
pub fn table_title(kind: ExtensionKind, installed: bool, level: Option<&str>) -> String {
    if installed {
        match level {
            Some(level) => format!(
                "Installed {} ({} level)",
                capitalize(kind.plural()),
                level
            ),
            None => format!("Installed {}", capitalize(kind.plural())),
        }
    } else {
        format!("Available {}", capitalize(kind.plural()))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
