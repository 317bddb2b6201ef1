//! Shared test utilities and fixture generators

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Markdown definition with a front matter description.
pub fn definition_with_front_matter(title: &str, description: &str) -> String {
    format!(
        "---\ndescription: \"{}\"\nallowed-tools: [\"Read\", \"Grep\"]\n---\n\n# {}\n\nInstructions here.\n",
        description, title
    )
}

/// Seed a catalog root with the standard fixture set:
///
/// - agents: `code-reviewer`, `doc-writer` (no front matter),
///   `security-scanner`
/// - commands: `changelog`, `smart-commit`
/// - workflows: `release-flow` referencing `smart-commit`, `changelog`,
///   `code-reviewer`, and `security-scanner`
pub fn create_source_tree() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp catalog");
    let root = temp.path();

    write_agent(
        root,
        "code-reviewer",
        &definition_with_front_matter("Code Reviewer", "Reviews diffs for defects"),
    );
    write_agent(root, "doc-writer", "# Doc Writer\n\nNo front matter here.\n");
    write_agent(
        root,
        "security-scanner",
        &definition_with_front_matter("Security Scanner", "Scans changes for secrets"),
    );

    write_command(
        root,
        "changelog",
        &definition_with_front_matter("Changelog", "Drafts a changelog entry"),
    );
    write_command(
        root,
        "smart-commit",
        &definition_with_front_matter("Smart Commit", "Writes a commit message"),
    );

    write_workflow(
        root,
        "release-flow",
        "description: Release cut with review\n\
         command: smart-commit\n\
         commands:\n  - changelog\n\
         agents:\n  - code-reviewer\n  - security-scanner\n",
    );

    temp
}

pub fn write_agent(root: &Path, name: &str, content: &str) {
    write_definition(root, "agents", name, "md", content);
}

pub fn write_command(root: &Path, name: &str, content: &str) {
    write_definition(root, "commands", name, "md", content);
}

pub fn write_workflow(root: &Path, name: &str, content: &str) {
    write_definition(root, "workflows", name, "yaml", content);
}

fn write_definition(root: &Path, subdir: &str, name: &str, ext: &str, content: &str) {
    let dir = root.join(subdir);
    fs::create_dir_all(&dir).expect("failed to create fixture dir");
    fs::write(dir.join(format!("{}.{}", name, ext)), content).expect("failed to write fixture");
}

/// Fresh project directory with no `.claude` tree yet.
pub fn create_project_dir() -> TempDir {
    TempDir::new().expect("failed to create temp project")
}
