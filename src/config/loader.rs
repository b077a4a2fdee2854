//! Settings discovery and loading.
//!
//! Settings are layered, later layers overriding earlier ones:
//! 1. Built-in defaults
//! 2. Project settings file (`.pystrap.yml` in the project directory)
//! 3. `PYSTRAP_*` environment variables
//!
//! Command-line flags are applied on top by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PystrapError, Result};

use super::settings::Settings;

/// Settings file name inside the project directory.
pub const SETTINGS_FILE: &str = ".pystrap.yml";

/// Overrides `version_manager`.
pub const ENV_VERSION_MANAGER: &str = "PYSTRAP_VERSION_MANAGER";
/// Overrides `command_timeout` (seconds).
pub const ENV_COMMAND_TIMEOUT: &str = "PYSTRAP_COMMAND_TIMEOUT";
/// Overrides `legacy_exit`.
pub const ENV_LEGACY_EXIT: &str = "PYSTRAP_LEGACY_EXIT";

/// Location of the settings file for a project.
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_FILE)
}

/// Parse YAML content into Settings.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| PystrapError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the settings file, if present.
///
/// A missing file is not an error and yields defaults.
///
/// # Errors
///
/// Returns `ConfigParse` if the file exists but is invalid.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file at {}", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(PystrapError::Io(e)),
    }
}

/// Apply `PYSTRAP_*` overrides using a custom env var lookup function.
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides<F>(mut settings: Settings, env_fn: F) -> Settings
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Ok(command) = env_fn(ENV_VERSION_MANAGER) {
        if !command.trim().is_empty() {
            settings.version_manager = command;
        }
    }

    if let Ok(raw) = env_fn(ENV_COMMAND_TIMEOUT) {
        match raw.trim().parse::<u64>() {
            Ok(0) => settings.command_timeout = None,
            Ok(seconds) => settings.command_timeout = Some(seconds),
            Err(_) => tracing::warn!("Ignoring {}={:?}: not a number", ENV_COMMAND_TIMEOUT, raw),
        }
    }

    if let Ok(raw) = env_fn(ENV_LEGACY_EXIT) {
        match parse_flag(&raw) {
            Some(flag) => settings.legacy_exit = flag,
            None => tracing::warn!("Ignoring {}={:?}: not a boolean", ENV_LEGACY_EXIT, raw),
        }
    }

    settings
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Load settings for a project from its settings file and the process environment.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    load_settings_with_env(project_root, |key: &str| std::env::var(key))
}

/// Load settings with a custom env var lookup function.
pub fn load_settings_with_env<F>(project_root: &Path, env_fn: F) -> Result<Settings>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let settings = load_settings_file(&settings_path(project_root))?;
    Ok(apply_env_overrides(settings, env_fn))
}
