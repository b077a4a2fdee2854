//! pystrap - Python project skeleton bootstrapping.
//!
//! pystrap derives a project's names and author from its directory and git
//! configuration, asks the Python version manager which interpreters are
//! installed, and writes the files a new Python project starts with.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and action dispatch
//! - [`config`] - Optional `.pystrap.yml` settings and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`identity`] - Project, package and author resolution
//! - [`scaffold`] - Embedded templates and file generation
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//! - [`versions`] - Installed Python version selection
//!
//! # Example
//!
//! ```
//! use pystrap::identity::{ProjectIdentity, ResolutionInputs};
//! use std::path::PathBuf;
//!
//! let inputs = ResolutionInputs {
//!     working_directory: PathBuf::from("/home/me/my_cool_app"),
//!     repository_config: Some("url = git@github.com:me/my_cool_app.git".into()),
//!     ..Default::default()
//! };
//! let identity = ProjectIdentity::resolve(&inputs);
//! assert_eq!(identity.project, "my-cool-app");
//! assert_eq!(identity.package, "my_cool_app");
//! assert_eq!(identity.repository, "https://github.com/me/my_cool_app");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod scaffold;
pub mod shell;
pub mod ui;
pub mod versions;

pub use error::{PystrapError, Result};
