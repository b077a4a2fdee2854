//! Settings schema.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scaffold::DevPackage;
use crate::shell::CommandSpec;
use crate::versions::DEFAULT_VERSION_MANAGER;

/// Tool settings, as read from `.pystrap.yml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Command listing installed runtimes and environments.
    pub version_manager: String,

    /// Seconds after which an external command is killed. None waits forever.
    pub command_timeout: Option<u64>,

    /// Report errors on stdout with exit status 0.
    pub legacy_exit: bool,

    /// Appended to the built-in development dependency table.
    pub extra_dev_packages: Vec<DevPackage>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_manager: DEFAULT_VERSION_MANAGER.to_string(),
            command_timeout: None,
            legacy_exit: false,
            extra_dev_packages: Vec::new(),
        }
    }
}

impl Settings {
    /// The version manager invocation, falling back to the default for a blank value.
    pub fn version_manager_command(&self) -> CommandSpec {
        CommandSpec::parse(&self.version_manager)
            .unwrap_or_else(|| CommandSpec::new("pyenv").arg("versions"))
    }

    /// External command timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.command_timeout.map(Duration::from_secs)
    }
}
