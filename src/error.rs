//! Error types for pystrap operations.
//!
//! This module defines [`PystrapError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PystrapError` for conditions that end the current action
//! - Absent inputs (no `.git/config`, no `~/.gitconfig`, no settings file) are
//!   not errors; they are represented as `None` and resolved with fallbacks
//! - Use `anyhow::Error` (via `PystrapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pystrap operations.
#[derive(Debug, Error)]
pub enum PystrapError {
    /// An external program could not be started at all.
    #[error("{tool} is not installed")]
    ExternalToolMissing { tool: String },

    /// An external program ran but exited unsuccessfully.
    #[error("{tool} failed with exit code {code:?}: {stderr}")]
    ExternalToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An external program exceeded the configured timeout and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// The version manager lists no runtime matching `3.<minor>.<patch>`.
    #[error("python3 virtualenv is not found")]
    NoMatchingVersion,

    /// No environment name starts with the project name.
    #[error("No environment found for project '{project}'")]
    EnvironmentNotFound { project: String },

    /// Embedded template does not exist.
    #[error("Unknown template: {name}")]
    TemplateNotFound { name: String },

    /// Template references a token with no value.
    #[error("Failed to render template {name}: {message}")]
    TemplateRender { name: String, message: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pystrap operations.
pub type Result<T> = std::result::Result<T, PystrapError>;
