//! The `create_pyproject` action.

use chrono::Datelike;

use crate::error::Result;
use crate::scaffold::Scaffold;
use crate::ui::UserInterface;
use crate::versions::python_series;

use super::dispatcher::{ActionContext, Command, CommandResult};

/// Writes `pyproject.toml` pinned to the newest installed Python 3 series.
pub struct CreatePyprojectCommand<'a> {
    ctx: ActionContext<'a>,
    year: Option<i32>,
}

impl<'a> CreatePyprojectCommand<'a> {
    /// Create a new create_pyproject command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx, year: None }
    }

    /// Use a fixed copyright year instead of the current one.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

impl Command for CreatePyprojectCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let latest = self.ctx.version_selector().latest_python3()?;
        let series = python_series(&latest);
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());

        let path = Scaffold::new(self.ctx.project_root, self.ctx.identity)
            .write_pyproject(&series, year)?;

        ui.success(&format!("Wrote {} (python ^{})", path.display(), series));
        ui.result(&latest);
        Ok(CommandResult::success())
    }
}
