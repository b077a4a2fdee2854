//! Command-line interface for pystrap.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Action implementations

pub mod args;
pub mod commands;

pub use args::{Action, Cli};
pub use commands::{
    resolve_project_root, ActionContext, Command, CommandDispatcher, CommandResult,
};
