//! Catalog module - the read-only source side: bundled extension
//! discovery, front matter metadata, and workflow bundles.

pub mod front_matter;
pub mod source;
pub mod types;
pub mod workflow;

pub use front_matter::{parse_front_matter, split_front_matter, FrontMatter};
pub use source::Catalog;
pub use types::{Extension, ExtensionKind};
pub use workflow::{resolve_workflow, WorkflowBundle, WorkflowSpec};
