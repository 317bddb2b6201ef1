//! Install, uninstall, and installed-listing operations.
//!
//! Everything here is a plain filesystem call: existence checks,
//! `create_dir_all`, `copy`, `remove_file`, `read_dir`. There is no index
//! to update and no rollback; re-running the command is the recovery
//! story.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::catalog::{Extension, ExtensionKind};
use crate::error::{ExtError, Result};
use crate::store::target::InstallLevel;

/// Outcome of a successful single install.
#[derive(Debug, Clone)]
pub struct Installed {
    pub name: String,
    pub kind: ExtensionKind,
    /// Where the file was copied to.
    pub path: PathBuf,
    /// Whether an existing file was overwritten (`--force`).
    pub replaced: bool,
}

/// An extension file found in an install target.
#[derive(Debug, Clone, Serialize)]
pub struct InstalledExtension {
    pub name: String,
    pub path: PathBuf,
    /// File modification time, when the filesystem reports one.
    #[serde(skip)]
    pub modified: Option<DateTime<Local>>,
}

/// Per-item results of a batch install.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub installed: Vec<Installed>,
    pub failed: Vec<(String, ExtError)>,
}

impl BatchOutcome {
    /// True when at least one item was requested and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.installed.is_empty() && !self.failed.is_empty()
    }
}

/// Path an extension of this kind and name installs to.
pub fn install_path(kind: ExtensionKind, name: &str, level: &InstallLevel) -> Result<PathBuf> {
    Ok(level
        .claude_dir()?
        .join(kind.install_dir())
        .join(format!("{}.{}", name, kind.file_extension())))
}

/// Whether an extension is present in the install target.
pub fn is_installed(kind: ExtensionKind, name: &str, level: &InstallLevel) -> Result<bool> {
    Ok(install_path(kind, name, level)?.is_file())
}

/// Copy one extension into the target.
///
/// The source must exist and the target must be absent unless `force` is
/// set; parent directories are created as needed and the file is copied
/// byte-for-byte.
pub fn install(ext: &Extension, level: &InstallLevel, force: bool) -> Result<Installed> {
    if !ext.path.is_file() {
        return Err(ExtError::NotFound {
            kind: ext.kind,
            name: ext.name.clone(),
        });
    }

    let target = install_path(ext.kind, &ext.name, level)?;
    let replaced = target.is_file();
    if replaced && !force {
        return Err(ExtError::AlreadyInstalled {
            kind: ext.kind,
            name: ext.name.clone(),
            path: target,
        });
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&ext.path, &target)?;

    Ok(Installed {
        name: ext.name.clone(),
        kind: ext.kind,
        path: target,
        replaced,
    })
}

/// Install a batch of extensions, best effort per item.
///
/// Failures (not found, already installed, I/O) are recorded and do not
/// stop the batch. `observe` is called once per item with the result, so
/// the caller can drive a progress bar or per-item output.
pub fn install_many(
    extensions: &[Extension],
    level: &InstallLevel,
    force: bool,
    mut observe: impl FnMut(&Extension, &Result<Installed>),
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for ext in extensions {
        let result = install(ext, level, force);
        observe(ext, &result);
        match result {
            Ok(installed) => outcome.installed.push(installed),
            Err(e) => outcome.failed.push((ext.name.clone(), e)),
        }
    }
    outcome
}

/// Delete an installed extension file, returning the removed path.
///
/// A missing target is an error and performs no filesystem mutation.
pub fn uninstall(kind: ExtensionKind, name: &str, level: &InstallLevel) -> Result<PathBuf> {
    let target = install_path(kind, name, level)?;
    if !target.is_file() {
        return Err(ExtError::NotInstalled {
            kind,
            name: name.to_string(),
            level: level.label().to_string(),
        });
    }
    fs::remove_file(&target)?;
    Ok(target)
}

/// List installed extensions of a kind at a level, sorted by name.
pub fn list_installed(kind: ExtensionKind, level: &InstallLevel) -> Result<Vec<InstalledExtension>> {
    let dir = level.claude_dir()?.join(kind.install_dir());
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ExtError::Io(e)),
    };

    let mut installed = Vec::new();
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
        installed.push(InstalledExtension {
            name: name.to_string(),
            modified: modified_time(&path),
            path,
        });
    }

    installed.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(installed)
}

fn modified_time(path: &Path) -> Option<DateTime<Local>> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(modified))
}
