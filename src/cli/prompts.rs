//! Interactive prompts using dialoguer

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::store::InstallLevel;

/// Fail early when stdin/stdout is not a terminal; the prompt-driven
/// flows have no scripted fallback.
pub fn require_tty() -> Result<()> {
    if !console::user_attended() {
        anyhow::bail!(
            "interactive mode requires a terminal; use the non-interactive subcommands instead"
        );
    }
    Ok(())
}

/// Prompt user to confirm proceeding with an action
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Single-choice selection, returns the chosen index
pub fn select(message: &str, items: &[&str]) -> Result<usize> {
    let choice = Select::new()
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact()?;
    Ok(choice)
}

/// Multi-choice selection, returns the chosen indices
pub fn multi_select(message: &str, items: &[String]) -> Result<Vec<usize>> {
    let chosen = MultiSelect::new()
        .with_prompt(message)
        .items(items)
        .interact()?;
    Ok(chosen)
}

/// Prompt for the install level: user-global or an explicit project path
pub fn select_level(verb: &str) -> Result<InstallLevel> {
    let choice = select(
        &format!("{} at which level?", verb),
        &["User level (~/.claude)", "Project level"],
    )?;
    if choice == 0 {
        return Ok(InstallLevel::User);
    }

    let path: String = Input::new()
        .with_prompt("Project path")
        .default(".".to_string())
        .interact_text()?;
    Ok(InstallLevel::Project(PathBuf::from(path)))
}
