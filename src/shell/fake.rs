//! Scripted command runner for testing.
//!
//! `FakeRunner` implements [`CommandRunner`] without spawning anything. Each
//! command line is mapped to a canned response, and every invocation is
//! recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use pystrap::shell::{CommandRunner, CommandSpec, FakeRunner};
//!
//! let runner = FakeRunner::new().with_stdout("pyenv versions", "3.9.1\n3.10.0\n");
//! let output = runner.run(&CommandSpec::parse("pyenv versions").unwrap()).unwrap();
//!
//! assert_eq!(output.stdout_lines(), vec!["3.9.1", "3.10.0"]);
//! assert_eq!(runner.calls(), vec!["pyenv versions".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{PystrapError, Result};

use super::command::{CommandOutput, CommandRunner, CommandSpec};

/// A canned reaction to one command line.
#[derive(Debug, Clone)]
enum FakeResponse {
    Output {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    Missing,
}

/// Command runner returning pre-configured responses.
///
/// Commands without a configured response behave as if the program were not
/// installed.
#[derive(Debug, Default)]
pub struct FakeRunner {
    responses: HashMap<String, FakeResponse>,
    calls: RefCell<Vec<String>>,
    dirs: RefCell<Vec<Option<std::path::PathBuf>>>,
}

impl FakeRunner {
    /// Create a runner with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command` with a successful exit and the given stdout.
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_exit(command, 0, stdout, "")
    }

    /// Respond to `command` with an arbitrary exit code and output.
    pub fn with_exit(mut self, command: &str, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            FakeResponse::Output {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Make `command` fail as if its program were not installed.
    pub fn with_missing(mut self, command: &str) -> Self {
        self.responses
            .insert(command.to_string(), FakeResponse::Missing);
        self
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Working directories of the commands run so far, in order.
    pub fn working_dirs(&self) -> Vec<Option<std::path::PathBuf>> {
        self.dirs.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let line = spec.display();
        self.calls.borrow_mut().push(line.clone());
        self.dirs.borrow_mut().push(spec.cwd.clone());

        match self.responses.get(&line) {
            Some(FakeResponse::Output {
                exit_code: 0,
                stdout,
                stderr,
            }) => Ok(CommandOutput::success(
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(FakeResponse::Output {
                exit_code,
                stdout,
                stderr,
            }) => Ok(CommandOutput::failure(
                Some(*exit_code),
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(FakeResponse::Missing) | None => Err(PystrapError::ExternalToolMissing {
                tool: spec.program.clone(),
            }),
        }
    }
}
