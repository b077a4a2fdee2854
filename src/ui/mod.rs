//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output in tests
//!
//! Action results (a version, an environment name, a package list) are
//! written plainly to stdout; status messages go to stderr so that shell
//! callers can capture results with `$(pystrap ...)`.

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PystrapTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print an action result. Always shown, never styled.
    fn result(&mut self, value: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Relay captured output of an external command.
    fn command_output(&mut self, output: &str);
}
