//! The `create_basic_files` action.

use crate::error::Result;
use crate::scaffold::Scaffold;
use crate::ui::UserInterface;

use super::dispatcher::{ActionContext, Command, CommandResult};

/// Writes the Makefile, lint and ignore configs, and package markers.
pub struct CreateBasicFilesCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> CreateBasicFilesCommand<'a> {
    /// Create a new create_basic_files command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for CreateBasicFilesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scaffold = Scaffold::new(self.ctx.project_root, self.ctx.identity);
        for path in scaffold.write_basic_files()? {
            let shown = path.strip_prefix(scaffold.root()).unwrap_or(&path);
            ui.success(&format!("Wrote {}", shown.display()));
        }
        Ok(CommandResult::success())
    }
}
