//! Project identity resolution.
//!
//! Resolution is split into two steps:
//! 1. [`ResolutionInputs::gather`] reads `.git/config`, `~/.gitconfig` and the
//!    environment. This is the only step that touches the filesystem.
//! 2. [`ProjectIdentity::resolve`] turns those inputs into an identity. It is a
//!    pure function.
//!
//! Names come from the repository remote when one is configured, otherwise
//! from the working directory's basename.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::author::resolve_author;
use super::names::resolve_from_working_directory;
use super::repository::{repository_url, resolve_from_repository};

/// Repository config location relative to the working directory.
pub const REPOSITORY_CONFIG: &str = ".git/config";

/// User config location relative to `$HOME`.
pub const USER_CONFIG: &str = ".gitconfig";

/// Where the project names were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    /// Final path segment of the repository remote URL.
    Repository,
    /// Basename of the working directory.
    WorkingDirectory,
}

/// Everything identity resolution depends on.
#[derive(Debug, Clone, Default)]
pub struct ResolutionInputs {
    /// Directory the tool operates in.
    pub working_directory: PathBuf,
    /// Contents of `<working_directory>/.git/config`, if readable.
    pub repository_config: Option<String>,
    /// Contents of `$HOME/.gitconfig`, if readable.
    pub user_config: Option<String>,
    /// Value of `USER`, if set.
    pub env_user: Option<String>,
}

impl ResolutionInputs {
    /// Read the inputs for `working_directory` from disk and the process environment.
    pub fn gather(working_directory: &Path) -> Self {
        Self::gather_with_env(working_directory, |key: &str| std::env::var(key))
    }

    /// Read the inputs with a custom env var lookup function.
    pub fn gather_with_env<F>(working_directory: &Path, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let repository_config = read_optional(&working_directory.join(REPOSITORY_CONFIG));
        let user_config = env_fn("HOME")
            .ok()
            .and_then(|home| read_optional(&Path::new(&home).join(USER_CONFIG)));

        Self {
            working_directory: working_directory.to_path_buf(),
            repository_config,
            user_config,
            env_user: env_fn("USER").ok(),
        }
    }
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!("{} not read: {}", path.display(), e);
            None
        }
    }
}

/// Resolved identity of the project being bootstrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    /// Hyphenated distribution name.
    pub project: String,
    /// Underscored importable package name.
    pub package: String,
    /// Author string for packaging metadata.
    pub author: String,
    /// Browsable repository URL, empty when unknown.
    pub repository: String,
    /// Where `project`/`package` came from.
    pub source: NameSource,
}

impl ProjectIdentity {
    /// Resolve an identity from explicit inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pystrap::identity::{NameSource, ProjectIdentity, ResolutionInputs};
    ///
    /// let inputs = ResolutionInputs {
    ///     working_directory: PathBuf::from("/work/my_cool_app"),
    ///     env_user: Some("dev".to_string()),
    ///     ..Default::default()
    /// };
    /// let identity = ProjectIdentity::resolve(&inputs);
    ///
    /// assert_eq!(identity.project, "my-cool-app");
    /// assert_eq!(identity.package, "my_cool_app");
    /// assert_eq!(identity.author, "dev");
    /// assert_eq!(identity.source, NameSource::WorkingDirectory);
    /// ```
    pub fn resolve(inputs: &ResolutionInputs) -> Self {
        let author = resolve_author(inputs.user_config.as_deref(), inputs.env_user.as_deref());

        let identity = match resolve_from_repository(inputs.repository_config.as_deref()) {
            Some(remote) => Self {
                project: remote.names.project,
                package: remote.names.package,
                author,
                repository: remote.url,
                source: NameSource::Repository,
            },
            None => {
                let names = resolve_from_working_directory(&inputs.working_directory);
                // The URL is still recorded when its last segment is unusable.
                let repository = inputs
                    .repository_config
                    .as_deref()
                    .map(repository_url)
                    .unwrap_or_default();
                Self {
                    project: names.project,
                    package: names.package,
                    author,
                    repository,
                    source: NameSource::WorkingDirectory,
                }
            }
        };

        tracing::debug!("project = {}", identity.project);
        tracing::debug!("package = {}", identity.package);
        tracing::debug!("name = {}", identity.author);
        tracing::debug!("repository = {}", identity.repository);

        identity
    }

    /// Gather inputs for `working_directory` and resolve them.
    pub fn discover(working_directory: &Path) -> Self {
        Self::resolve(&ResolutionInputs::gather(working_directory))
    }

    /// The documentation link path fragment for the repository host.
    ///
    /// GitHub source links use `blob/main`, GitLab uses `-/tree/main`, other
    /// hosts get no fragment.
    pub fn source_branch_path(&self) -> &'static str {
        if self.repository.contains("github") {
            "blob/main"
        } else if self.repository.contains("gitlab") {
            "-/tree/main"
        } else {
            ""
        }
    }
}
