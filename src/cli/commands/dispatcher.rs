//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ActionContext`] for the data every action shares
//! - [`CommandDispatcher`] for routing actions

use std::path::{Path, PathBuf};

use crate::cli::args::Action;
use crate::config::Settings;
use crate::error::Result;
use crate::identity::ProjectIdentity;
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;
use crate::versions::VersionSelector;

/// Trait for command implementations.
///
/// Each CLI action implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for results and status messages
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures are reported as `Err`; `main` owns their exit semantics.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Everything an action needs, resolved once per run.
#[derive(Clone, Copy)]
pub struct ActionContext<'a> {
    /// Directory files are written into.
    pub project_root: &'a Path,
    /// Identity resolved at startup.
    pub identity: &'a ProjectIdentity,
    /// Effective settings.
    pub settings: &'a Settings,
    /// Runner for external programs.
    pub runner: &'a dyn CommandRunner,
}

impl<'a> ActionContext<'a> {
    /// A version selector using the configured version manager.
    pub fn version_selector(&self) -> VersionSelector<'a> {
        VersionSelector::new(self.runner, self.settings.version_manager_command())
    }
}

/// Absolute project root: `project` when given, otherwise the current directory.
///
/// The path is canonicalized so that `.` or `foo/..` still have a basename to
/// derive names from.
///
/// # Errors
///
/// [`PystrapError::Io`](crate::error::PystrapError::Io) if the directory does
/// not exist or the current directory is unavailable.
pub fn resolve_project_root(project: Option<&Path>) -> Result<PathBuf> {
    let dir = match project {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(dir.canonicalize()?)
}

/// Dispatches CLI actions to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, settings: Settings) -> Self {
        Self {
            project_root,
            settings,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve the project identity and run `action` with real external commands.
    pub fn dispatch(&self, action: Action, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let identity = ProjectIdentity::discover(&self.project_root);
        let runner = SystemRunner::with_timeout(self.settings.timeout());
        self.dispatch_with(action, &identity, &runner, ui)
    }

    /// Run `action` with an explicit identity and runner.
    pub fn dispatch_with(
        &self,
        action: Action,
        identity: &ProjectIdentity,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Dispatching {}", action.name());

        let ctx = ActionContext {
            project_root: &self.project_root,
            identity,
            settings: &self.settings,
            runner,
        };

        match action {
            Action::CreatePyproject => super::pyproject::CreatePyprojectCommand::new(ctx).execute(ui),
            Action::ProjectPython => super::python::ProjectPythonCommand::new(ctx).execute(ui),
            Action::LatestVenv => super::python::LatestVenvCommand::new(ctx).execute(ui),
            Action::CreateBasicFiles => {
                super::basic_files::CreateBasicFilesCommand::new(ctx).execute(ui)
            }
            Action::GetDevPackages => super::dev_packages::DevPackagesCommand::new(ctx).execute(ui),
            Action::GetSphinxCommand => super::sphinx::SphinxCommandCommand::new(ctx).execute(ui),
            Action::SetupSphinx => super::sphinx::SetupSphinxCommand::new(ctx).execute(ui),
            Action::ShowIdentity => super::identity::ShowIdentityCommand::new(ctx).execute(ui),
        }
    }
}
