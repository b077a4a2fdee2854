//! The `latest_venv` and `project_python` actions.
//!
//! Both print one line to stdout so that shell callers can write
//! `pyenv local $(pystrap project_python)`.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{ActionContext, Command, CommandResult};

/// Prints the newest installed `3.X.Y` release.
pub struct LatestVenvCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> LatestVenvCommand<'a> {
    /// Create a new latest_venv command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for LatestVenvCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let latest = self.ctx.version_selector().latest_python3()?;
        ui.result(&latest);
        Ok(CommandResult::success())
    }
}

/// Prints the first installed environment named after the project.
pub struct ProjectPythonCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> ProjectPythonCommand<'a> {
    /// Create a new project_python command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for ProjectPythonCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let environment = self
            .ctx
            .version_selector()
            .project_environment(&self.ctx.identity.project)?;
        ui.result(&environment);
        Ok(CommandResult::success())
    }
}
