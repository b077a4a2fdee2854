//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// pystrap - Python project skeleton bootstrapping and interpreter resolution.
#[derive(Debug, Parser)]
#[command(name = "pystrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform
    #[arg(value_enum, required_unless_present = "completions")]
    pub action: Option<Action>,

    /// Path to project directory (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show output of external commands
    #[arg(short, long)]
    pub verbose: bool,

    /// Print results and errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Kill external commands running longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report errors on stdout and exit with status 0
    #[arg(long)]
    pub legacy_exit: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", conflicts_with = "action")]
    pub completions: Option<Shell>,
}

/// Available actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Write pyproject.toml for the latest installed Python 3 and print that version
    #[value(name = "create_pyproject")]
    CreatePyproject,

    /// Print the environment whose name starts with the project name
    #[value(name = "project_python", alias = "get_project_python")]
    ProjectPython,

    /// Print the latest installed Python 3 version
    #[value(name = "latest_venv")]
    LatestVenv,

    /// Write Makefile, .gitignore, .flake8 and package/test markers
    #[value(name = "create_basic_files")]
    CreateBasicFiles,

    /// Print development dependency specifiers
    #[value(name = "get_dev_packages")]
    GetDevPackages,

    /// Create docs/ and print the sphinx-quickstart command
    #[value(name = "get_sphinx_command")]
    GetSphinxCommand,

    /// Bootstrap Sphinx if needed and write docs/Makefile and docs/source/conf.py
    #[value(name = "setup_sphinx")]
    SetupSphinx,

    /// Print the resolved project identity as JSON
    #[value(name = "show_identity")]
    ShowIdentity,
}

impl Action {
    /// Name as typed on the command line.
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }
}
