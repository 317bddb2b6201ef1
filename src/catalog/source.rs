//! The bundled extension catalog: root resolution, listing, and lookup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::front_matter::parse_front_matter;
use crate::catalog::types::{Extension, ExtensionKind};
use crate::error::{ExtError, Result};

/// Read-only view over the bundled `extensions/` source tree.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Open a catalog rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the catalog root.
    ///
    /// Order: explicit override (`--extensions-dir` / `CLAUDE_EXT_DIR`),
    /// then `extensions/` next to the running executable, then
    /// `extensions/` under the current directory. A missing root is not an
    /// error; every listing against it is simply empty.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
        {
            let bundled = exe_dir.join("extensions");
            if bundled.is_dir() {
                return Self::new(bundled);
            }
        }

        Self::new("extensions")
    }

    /// Directory holding definitions of the given kind.
    pub fn kind_dir(&self, kind: ExtensionKind) -> PathBuf {
        self.root.join(kind.source_dir())
    }

    /// List every available extension of a kind, sorted by name.
    ///
    /// Returns exactly the set of stems whose file extension matches the
    /// kind; other files in the directory are ignored. A missing kind
    /// directory yields an empty list.
    pub fn list(&self, kind: ExtensionKind) -> Result<Vec<Extension>> {
        let dir = self.kind_dir(kind);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ExtError::Io(e)),
        };

        let mut extensions = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(kind.file_extension()) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            extensions.push(Extension {
                name: name.to_string(),
                kind,
                description: read_description(&path, kind),
                path,
            });
        }

        extensions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(extensions)
    }

    /// Look up a single extension by name.
    pub fn find(&self, kind: ExtensionKind, name: &str) -> Result<Extension> {
        let path = self
            .kind_dir(kind)
            .join(format!("{}.{}", name, kind.file_extension()));
        if !path.is_file() {
            return Err(ExtError::NotFound {
                kind,
                name: name.to_string(),
            });
        }
        Ok(Extension {
            name: name.to_string(),
            kind,
            description: read_description(&path, kind),
            path,
        })
    }
}

/// Best-effort description for a listing row; unreadable or unannotated
/// files still list, just without one.
fn read_description(path: &Path, kind: ExtensionKind) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    match kind {
        ExtensionKind::Agent | ExtensionKind::Command => {
            parse_front_matter(&content)?.description
        }
        ExtensionKind::Workflow => {
            let value: serde_yaml::Value = serde_yaml::from_str(&content).ok()?;
            value
                .get("description")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        }
    }
}
