//! Core extension types shared by the catalog and the install store.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The closed set of extension kinds this tool manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    /// Markdown agent definition.
    Agent,
    /// Markdown slash-command definition.
    Command,
    /// YAML bundle referencing a command plus supporting agents/commands.
    Workflow,
}

impl ExtensionKind {
    /// Subdirectory of the bundled `extensions/` tree holding this kind.
    pub fn source_dir(&self) -> &'static str {
        match self {
            ExtensionKind::Agent => "agents",
            ExtensionKind::Command => "commands",
            ExtensionKind::Workflow => "workflows",
        }
    }

    /// Subdirectory under a `.claude` dir where installed files live.
    /// Workflow bundles resolve to their members before any copy happens,
    /// so only `agents/` and `commands/` ever appear in an install target.
    pub fn install_dir(&self) -> &'static str {
        match self {
            ExtensionKind::Agent => "agents",
            ExtensionKind::Command => "commands",
            ExtensionKind::Workflow => "workflows",
        }
    }

    /// File extension for definitions of this kind.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExtensionKind::Agent | ExtensionKind::Command => "md",
            ExtensionKind::Workflow => "yaml",
        }
    }

    /// Singular display label ("agent", "command", "workflow").
    pub fn label(&self) -> &'static str {
        match self {
            ExtensionKind::Agent => "agent",
            ExtensionKind::Command => "command",
            ExtensionKind::Workflow => "workflow",
        }
    }

    /// Plural display label ("agents", ...).
    pub fn plural(&self) -> &'static str {
        match self {
            ExtensionKind::Agent => "agents",
            ExtensionKind::Command => "commands",
            ExtensionKind::Workflow => "workflows",
        }
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single extension discovered in the bundled catalog.
///
/// Instantiated transiently while listing or installing; nothing about an
/// `Extension` is persisted beyond the file it points at.
#[derive(Debug, Clone, Serialize)]
pub struct Extension {
    /// File stem, e.g. `security-scanner` for `agents/security-scanner.md`.
    pub name: String,
    pub kind: ExtensionKind,
    /// Absolute path of the source definition file.
    #[serde(skip)]
    pub path: PathBuf,
    /// Short description pulled from the front matter block, when present.
    pub description: Option<String>,
}

impl Extension {
    /// File name the extension installs as, e.g. `security-scanner.md`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.file_extension())
    }
}
