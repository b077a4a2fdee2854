//! CLI action implementations.
//!
//! Each action implements the [`Command`] trait, which provides a uniform
//! interface for executing actions and reporting results.
//!
//! # Architecture
//!
//! Actions are dispatched via [`CommandDispatcher`], which resolves the
//! project identity once and hands every action the same [`ActionContext`].

pub mod basic_files;
pub mod completions;
pub mod dev_packages;
pub mod dispatcher;
pub mod identity;
pub mod pyproject;
pub mod python;
pub mod sphinx;

pub use dispatcher::{
    resolve_project_root, ActionContext, Command, CommandDispatcher, CommandResult,
};
