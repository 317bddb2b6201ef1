//! Batch install summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::error::ExtError;
use crate::store::BatchOutcome;

/// Summary of a multi-extension install.
#[derive(Debug)]
pub struct InstallSummary {
    /// What was being installed, e.g. "agents" or "workflow members".
    pub subject: String,
    pub requested: usize,
    pub installed: usize,
    pub overwritten: usize,
    pub failed: Vec<(String, ExtError)>,
}

impl InstallSummary {
    pub fn from_outcome(subject: &str, requested: usize, outcome: BatchOutcome) -> Self {
        let overwritten = outcome.installed.iter().filter(|i| i.replaced).count();
        Self {
            subject: subject.to_string(),
            requested,
            installed: outcome.installed.len(),
            overwritten,
            failed: outcome.failed,
        }
    }

    /// True when at least one item was requested and none was installed.
    pub fn all_failed(&self) -> bool {
        self.requested > 0 && self.installed == 0
    }

    pub fn display(&self) {
        println!();
        println!(
            "  {} {}",
            style("📋").cyan(),
            style("INSTALL SUMMARY").white().bold()
        );
        println!("  {}", style("─".repeat(40)).dim());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new(format!("Requested {}", self.subject)),
            Cell::new(self.requested),
        ]);
        table.add_row(vec![
            Cell::new("✅ Installed"),
            Cell::new(self.installed)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        if self.overwritten > 0 {
            table.add_row(vec![
                Cell::new("♻️  Overwritten"),
                Cell::new(self.overwritten).fg(Color::Yellow),
            ]);
        }
        table.add_row(vec![
            Cell::new("❌ Failed"),
            Cell::new(self.failed.len()).fg(if self.failed.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        for line in table.to_string().lines() {
            println!("  {}", line);
        }

        if !self.failed.is_empty() {
            println!();
            for (name, error) in &self.failed {
                println!(
                    "  {} {}: {}",
                    style("✗").red(),
                    style(name).bold(),
                    error
                );
            }
        }
        println!();
    }
}
