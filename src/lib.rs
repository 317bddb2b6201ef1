//! claude-ext: Claude Code Extensions Manager
//!
//! A library and CLI for copying agent, command, and workflow extension
//! definitions between a bundled catalog and user- or project-level
//! `.claude` directories.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod report;
pub mod store;
pub mod utils;
