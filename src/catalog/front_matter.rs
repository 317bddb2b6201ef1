//! Lenient YAML front matter extraction for markdown definitions.
//!
//! Agent and command files may open with a `---` delimited YAML block
//! carrying a `description` plus arbitrary metadata (`allowed-tools`,
//! `model`, ...). A file without the block, or with YAML that fails to
//! parse, is still a valid extension; callers get `None` and move on.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Metadata parsed from a definition's leading front matter block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub description: Option<String>,
    /// Remaining keys, kept as raw YAML values.
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_yaml::Value>,
}

/// Parse the front matter block from a document, if it has one.
pub fn parse_front_matter(content: &str) -> Option<FrontMatter> {
    let (raw, _body) = split_front_matter(content)?;
    serde_yaml::from_str(raw).ok()
}

/// Split a document at its `---` delimiters into (front matter, body).
///
/// Returns `None` when the document does not open with a front matter
/// block or the closing delimiter is missing.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start();
    let after_open = trimmed.strip_prefix("---")?;
    let close = after_open.find("\n---")?;
    let front = after_open[..close].trim();
    let body = after_open[close + 4..].trim_start();
    Some((front, body))
}
