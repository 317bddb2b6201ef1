//! Report module - table and JSON renderings of listings and summaries

pub mod json;
pub mod summary;
pub mod tables;

pub use json::print_json;
pub use summary::InstallSummary;
pub use tables::*;
