//! Output verbosity.

/// Output verbosity mode.
///
/// Only status messages are affected; action results are always printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status messages plus output of external commands.
    Verbose,
    /// Status messages.
    #[default]
    Normal,
    /// Results and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows external command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
