//! The `get_sphinx_command` and `setup_sphinx` actions.

use crate::error::Result;
use crate::scaffold::Scaffold;
use crate::ui::UserInterface;

use super::dispatcher::{ActionContext, Command, CommandResult};

/// Creates `docs/` and prints the `sphinx-quickstart` invocation to run there.
pub struct SphinxCommandCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> SphinxCommandCommand<'a> {
    /// Create a new get_sphinx_command command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for SphinxCommandCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scaffold = Scaffold::new(self.ctx.project_root, self.ctx.identity);
        scaffold.prepare_docs_dir()?;
        ui.result(&scaffold.quickstart_command().display());
        Ok(CommandResult::success())
    }
}

/// Runs `sphinx-quickstart` when docs are not yet initialized, then writes
/// `docs/Makefile` and `docs/source/conf.py`.
pub struct SetupSphinxCommand<'a> {
    ctx: ActionContext<'a>,
}

impl<'a> SetupSphinxCommand<'a> {
    /// Create a new setup_sphinx command.
    pub fn new(ctx: ActionContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for SetupSphinxCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scaffold = Scaffold::new(self.ctx.project_root, self.ctx.identity);

        if scaffold.docs_initialized() {
            ui.warning("docs/source/conf.py exists, skipping sphinx-quickstart");
        } else {
            scaffold.prepare_docs_dir()?;
            let quickstart = scaffold.quickstart_command();
            ui.message(&format!("Running {}", quickstart.display()));
            let output = self
                .ctx
                .runner
                .run(&quickstart)?
                .require_success(&quickstart.program)?;
            ui.command_output(&output.stdout);
        }

        for path in scaffold.write_sphinx_files()? {
            let shown = path.strip_prefix(scaffold.root()).unwrap_or(&path);
            ui.success(&format!("Wrote {}", shown.display()));
        }
        Ok(CommandResult::success())
    }
}
