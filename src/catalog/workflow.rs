//! Workflow bundles: YAML recipes naming a command and its supporting
//! agents/commands, installed and removed as a group.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::source::Catalog;
use crate::catalog::types::{Extension, ExtensionKind};
use crate::error::{ExtError, Result};

/// Parsed contents of a `workflows/<name>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowSpec {
    #[serde(default)]
    pub description: Option<String>,
    /// The command this workflow is built around.
    pub command: String,
    /// Agents installed alongside the command.
    #[serde(default)]
    pub agents: Vec<String>,
    /// Helper commands installed alongside the main command.
    #[serde(default)]
    pub commands: Vec<String>,
}

impl WorkflowSpec {
    /// Load and parse a workflow definition file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|source| ExtError::InvalidWorkflow {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every member the bundle references, main command first.
    pub fn member_names(&self) -> Vec<(ExtensionKind, &str)> {
        let mut members = vec![(ExtensionKind::Command, self.command.as_str())];
        members.extend(
            self.commands
                .iter()
                .map(|c| (ExtensionKind::Command, c.as_str())),
        );
        members.extend(self.agents.iter().map(|a| (ExtensionKind::Agent, a.as_str())));
        members
    }
}

/// A workflow with every referenced member resolved against the catalog.
#[derive(Debug, Clone)]
pub struct WorkflowBundle {
    pub name: String,
    pub spec: WorkflowSpec,
    /// Resolved member extensions, main command first.
    pub members: Vec<Extension>,
}

/// Resolve a workflow by name: load its spec and look up every member.
///
/// A reference to a name missing from the catalog fails the whole
/// resolution; partially-resolvable bundles are not installable.
pub fn resolve_workflow(catalog: &Catalog, name: &str) -> Result<WorkflowBundle> {
    let workflow = catalog.find(ExtensionKind::Workflow, name)?;
    let spec = WorkflowSpec::load(&workflow.path)?;

    let mut members = Vec::new();
    for (kind, member) in spec.member_names() {
        let ext = catalog
            .find(kind, member)
            .map_err(|_| ExtError::DanglingMember {
                workflow: name.to_string(),
                kind,
                member: member.to_string(),
            })?;
        members.push(ext);
    }

    Ok(WorkflowBundle {
        name: name.to_string(),
        spec,
        members,
    })
}
