//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PystrapTheme, UserInterface};

/// Terminal UI implementation.
///
/// Results go to stdout unstyled so callers can capture them; everything
/// else goes to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PystrapTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors && should_use_colors() {
            PystrapTheme::new()
        } else {
            PystrapTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn result(&mut self, value: &str) {
        writeln!(self.out, "{}", value).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() && !output.is_empty() {
            write!(self.err, "{}", self.theme.format_dim(output)).ok();
        }
    }
}

/// Create the UI for a run.
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, colors))
}
