//! Store module - the writable target side: `.claude` directory
//! resolution, install/uninstall operations, and the known-projects
//! registry.

pub mod install;
pub mod projects;
pub mod target;

pub use install::{
    install, install_many, install_path, is_installed, list_installed, uninstall, BatchOutcome,
    Installed, InstalledExtension,
};
pub use projects::{decode_project_dir, encode_project_path, list_known_projects, KnownProject};
pub use target::InstallLevel;
