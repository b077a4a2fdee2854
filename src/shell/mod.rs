//! External command execution.

pub mod command;
pub mod fake;

pub use command::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
pub use fake::FakeRunner;
