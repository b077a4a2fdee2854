//! External command execution.

use crate::error::{PystrapError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often a child is polled while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A program invocation, run directly without an intermediate shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Working directory (inherits the current one when `None`).
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Split a whitespace-separated command line into a spec.
    ///
    /// Returns `None` for a blank line. No quoting rules are applied.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).args(parts))
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the program inside `dir`.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The command line as it would be typed, for messages and logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Turn a non-zero exit into [`PystrapError::ExternalToolFailed`].
    pub fn require_success(self, tool: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(PystrapError::ExternalToolFailed {
                tool: tool.to_string(),
                code: self.exit_code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }

    /// Stdout split into trimmed, non-empty lines.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Capability to run external programs.
///
/// Everything that talks to the version manager or the documentation
/// tooling goes through this trait so it can be replaced in tests.
pub trait CommandRunner {
    /// Run the command to completion, capturing stdout and stderr.
    ///
    /// A program that cannot be started yields
    /// [`PystrapError::ExternalToolMissing`]; a non-zero exit is reported in
    /// the returned [`CommandOutput`], not as an error.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// Runs commands with `std::process`, blocking until they exit.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Runner that waits for every command indefinitely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that kills commands running longer than `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn spawn(spec: &CommandSpec) -> Result<Child> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                PystrapError::ExternalToolMissing {
                    tool: spec.program.clone(),
                }
            }
            _ => PystrapError::Io(e),
        })
    }

    fn wait_with_timeout(
        spec: &CommandSpec,
        mut child: Child,
        timeout: Duration,
        start: Instant,
    ) -> Result<CommandOutput> {
        // Pipes are drained on their own threads while the child is polled.
        let stdout_handle = child.stdout.take().map(|mut out| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = out.read_to_end(&mut buf);
                buf
            })
        });
        let stderr_handle = child.stderr.take().map(|mut err| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = err.read_to_end(&mut buf);
                buf
            })
        });

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if start.elapsed() >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PystrapError::CommandTimedOut {
                    command: spec.display(),
                    seconds: timeout.as_secs(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = stdout_handle
            .and_then(|h| h.join().ok())
            .unwrap_or_default();
        let stderr = stderr_handle
            .and_then(|h| h.join().ok())
            .unwrap_or_default();

        Ok(Self::collect(status, &stdout, &stderr, start.elapsed()))
    }

    fn collect(
        status: std::process::ExitStatus,
        stdout: &[u8],
        stderr: &[u8],
        duration: Duration,
    ) -> CommandOutput {
        let stdout = String::from_utf8_lossy(stdout).to_string();
        let stderr = String::from_utf8_lossy(stderr).to_string();

        if status.success() {
            CommandOutput::success(stdout, stderr, duration)
        } else {
            CommandOutput::failure(status.code(), stdout, stderr, duration)
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let start = Instant::now();
        tracing::debug!("Running: {}", spec.display());

        let child = Self::spawn(spec)?;

        let result = match self.timeout {
            Some(timeout) => Self::wait_with_timeout(spec, child, timeout, start)?,
            None => {
                let output = child.wait_with_output()?;
                Self::collect(
                    output.status,
                    &output.stdout,
                    &output.stderr,
                    start.elapsed(),
                )
            }
        };

        tracing::debug!(
            "{} exited with {:?} in {:?}",
            spec.program,
            result.exit_code,
            result.duration
        );

        Ok(result)
    }
}
