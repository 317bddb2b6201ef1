//! Install targets: the user-global and per-project `.claude` directories.

use std::fmt;
use std::path::PathBuf;

use crate::error::{ExtError, Result};

/// Where an extension gets installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallLevel {
    /// `~/.claude` of the invoking user.
    User,
    /// `<project>/.claude` of an explicit project directory.
    Project(PathBuf),
}

impl InstallLevel {
    /// Map the optional `--project PATH` flag to a level.
    pub fn from_project_flag(project: Option<PathBuf>) -> Self {
        match project {
            Some(path) => InstallLevel::Project(path),
            None => InstallLevel::User,
        }
    }

    /// Resolve the `.claude` directory for this level.
    pub fn claude_dir(&self) -> Result<PathBuf> {
        match self {
            InstallLevel::User => {
                let home = dirs::home_dir().ok_or(ExtError::HomeNotFound)?;
                Ok(home.join(".claude"))
            }
            InstallLevel::Project(path) => Ok(path.join(".claude")),
        }
    }

    /// Short label for messages: "user" or "project".
    pub fn label(&self) -> &'static str {
        match self {
            InstallLevel::User => "user",
            InstallLevel::Project(_) => "project",
        }
    }
}

impl fmt::Display for InstallLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallLevel::User => f.write_str("user"),
            InstallLevel::Project(path) => write!(f, "project {}", path.display()),
        }
    }
}
