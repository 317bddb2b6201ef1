//! Shared terminal helpers: styling and progress bars

pub mod progress;
pub mod styling;

pub use progress::*;
pub use styling::*;
