//! Known-projects listing from `~/.claude/projects/`.
//!
//! Claude Code names each entry of that directory after the project's
//! absolute path with separators (and a few other characters) replaced by
//! hyphens, e.g. `/root/crate` becomes `-root-crate`. Hyphens that were
//! part of a real directory name are indistinguishable from separators,
//! so decoding is a best-effort reconstruction with no correctness
//! guarantee.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ExtError, Result};

/// One entry of the projects directory.
#[derive(Debug, Clone, Serialize)]
pub struct KnownProject {
    /// Raw hyphen-encoded directory name.
    pub dir_name: String,
    /// Best-effort reconstruction of the original project path.
    pub path: PathBuf,
    /// Whether the reconstructed path exists on disk.
    pub exists: bool,
}

/// Encode a project path the way the per-project directories are named:
/// every path separator becomes a hyphen, so an absolute path gains a
/// leading hyphen.
pub fn encode_project_path(path: &Path) -> String {
    path.display()
        .to_string()
        .chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            other => other,
        })
        .collect()
}

/// Reconstruct a project path from its hyphen-encoded directory name.
///
/// Walks the hyphen-separated tokens left to right, backtracking over
/// "separator vs literal hyphen" choices and keeping the first candidate
/// whose directory prefix exists on disk. When nothing on disk matches
/// (the project was moved or deleted), falls back to reading every hyphen
/// as a separator.
pub fn decode_project_dir(encoded: &str) -> PathBuf {
    let tokens: Vec<&str> = encoded.split('-').collect();

    // A leading hyphen encodes the root separator of an absolute path.
    let (prefix, rest) = match tokens.split_first() {
        Some((&"", rest)) => (PathBuf::from("/"), rest),
        _ => (PathBuf::new(), &tokens[..]),
    };

    if let Some((first, rest)) = rest.split_first() {
        if let Some(found) = search(&prefix, first, rest) {
            return found;
        }
    }

    naive_decode(encoded)
}

/// All hyphens read as separators; the fallback when nothing exists.
fn naive_decode(encoded: &str) -> PathBuf {
    PathBuf::from(encoded.replace('-', "/"))
}

fn search(prefix: &Path, segment: &str, rest: &[&str]) -> Option<PathBuf> {
    match rest.split_first() {
        None => {
            let candidate = prefix.join(segment);
            candidate.is_dir().then_some(candidate)
        }
        Some((token, rest)) => {
            // Read the next hyphen as a separator: the segment so far must
            // then be a real directory.
            if !segment.is_empty() {
                let closed = prefix.join(segment);
                if closed.is_dir() {
                    if let Some(found) = search(&closed, token, rest) {
                        return Some(found);
                    }
                }
            }
            // Read it as a literal hyphen inside the segment.
            search(prefix, &format!("{segment}-{token}"), rest)
        }
    }
}

/// List the entries of a `.claude/projects` directory, sorted by name.
pub fn list_known_projects(claude_dir: &Path) -> Result<Vec<KnownProject>> {
    let dir = claude_dir.join("projects");
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ExtError::Io(e)),
    };

    let mut projects = Vec::new();
    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let Some(dir_name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let path = decode_project_dir(&dir_name);
        projects.push(KnownProject {
            exists: path.is_dir(),
            path,
            dir_name,
        });
    }

    projects.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(projects)
}
