//! Tool settings.
//!
//! - Schema and defaults in [`settings`]
//! - File discovery, parsing and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use pystrap::config::load_settings_with_env;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".pystrap.yml"), "command_timeout: 30").unwrap();
//!
//! let settings = load_settings_with_env(temp.path(), |_: &str| {
//!     Err(std::env::VarError::NotPresent)
//! })
//! .unwrap();
//! assert_eq!(settings.command_timeout, Some(30));
//! ```

pub mod loader;
pub mod settings;

pub use loader::{
    apply_env_overrides, load_settings, load_settings_file, load_settings_with_env,
    parse_settings, settings_path, ENV_COMMAND_TIMEOUT, ENV_LEGACY_EXIT, ENV_VERSION_MANAGER,
    SETTINGS_FILE,
};
pub use settings::Settings;
