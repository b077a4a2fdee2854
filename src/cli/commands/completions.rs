//! Shell completions generation.
//!
//! `pystrap --completions <SHELL>` prints a completion script.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Write the completion script to `buf`.
    pub fn generate_into(&self, buf: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "pystrap", buf);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.generate_into(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
