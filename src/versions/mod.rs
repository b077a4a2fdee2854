//! Installed runtime discovery and selection.

pub mod selector;
pub mod version;

pub use selector::{
    filter_python3, find_project_environment, list_installed_versions, select_largest,
    VersionSelector, DEFAULT_VERSION_MANAGER,
};
pub use version::{is_python3_release, python_series, VersionTriple};
