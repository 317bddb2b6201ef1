//! Error types for catalog lookups and install/uninstall operations.
//!
//! Uses the `thiserror` crate for ergonomic error definition. Each variant
//! captures a specific failure mode so command handlers can render the
//! matching hint (e.g. "use --force to overwrite").

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ExtensionKind;

/// Errors raised by catalog lookups and install/uninstall operations.
#[derive(Debug, Error)]
pub enum ExtError {
    /// The requested extension does not exist in the bundled catalog.
    #[error("{kind} '{name}' not found in the extension catalog")]
    NotFound { kind: ExtensionKind, name: String },

    /// The target file already exists and `--force` was not given.
    #[error("{kind} '{name}' already installed at {}", .path.display())]
    AlreadyInstalled {
        kind: ExtensionKind,
        name: String,
        path: PathBuf,
    },

    /// Uninstall target does not exist at the requested level.
    #[error("{kind} '{name}' is not installed at {level} level")]
    NotInstalled {
        kind: ExtensionKind,
        name: String,
        level: String,
    },

    /// The user-level target needs a home directory and none could be found.
    #[error("could not determine the home directory for user-level installs")]
    HomeNotFound,

    /// A workflow bundle references a member that is missing from the catalog.
    #[error("workflow '{workflow}' references unknown {kind} '{member}'")]
    DanglingMember {
        workflow: String,
        kind: ExtensionKind,
        member: String,
    },

    /// A workflow file exists but its YAML does not describe a valid bundle.
    #[error("invalid workflow definition in {}: {source}", .path.display())]
    InvalidWorkflow {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// I/O error from the underlying copy/delete/scan call.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` for extension operations.
pub type Result<T> = std::result::Result<T, ExtError>;
