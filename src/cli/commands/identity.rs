//! The `show_identity` action.

use crate::error::{PystrapError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{ActionContext, Command, CommandResult};

/// Prints the resolved project identity as pretty JSON.
pub struct ShowIdentityCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> ShowIdentityCommand<'a> {
    /// Create a new show_identity command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for ShowIdentityCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let json = serde_json::to_string_pretty(self.ctx.identity)
            .map_err(|e| PystrapError::Other(e.into()))?;
        ui.result(&json);
        Ok(CommandResult::success())
    }
}
