//! Runtime version selection.
//!
//! Every public operation here is a pure function of the version manager's
//! listing, except [`list_installed_versions`] which runs the manager once.

use crate::error::{PystrapError, Result};
use crate::shell::{CommandRunner, CommandSpec};

use super::version::{is_python3_release, VersionTriple};

/// Version manager invocation used when no other is configured.
pub const DEFAULT_VERSION_MANAGER: &str = "pyenv versions";

/// Run the version manager and return its listing, one trimmed entry per line.
///
/// # Errors
///
/// - [`PystrapError::ExternalToolMissing`] if the manager cannot be started
/// - [`PystrapError::ExternalToolFailed`] if it exits non-zero
pub fn list_installed_versions(
    runner: &dyn CommandRunner,
    command: &CommandSpec,
) -> Result<Vec<String>> {
    let output = runner.run(command)?.require_success(&command.program)?;
    let versions = output.stdout_lines();
    tracing::debug!("{} listed {} entries", command.program, versions.len());
    Ok(versions)
}

/// Keep only plain `3.<minor>.<patch>` releases, in listing order.
///
/// # Errors
///
/// [`PystrapError::NoMatchingVersion`] if nothing remains.
pub fn filter_python3(versions: &[String]) -> Result<Vec<String>> {
    let matching: Vec<String> = versions
        .iter()
        .filter(|v| is_python3_release(v) && VersionTriple::parse(v).is_some())
        .cloned()
        .collect();

    if matching.is_empty() {
        return Err(PystrapError::NoMatchingVersion);
    }

    Ok(matching)
}

/// The entry with the largest (major, minor, patch), compared numerically.
///
/// Equal triples resolve to the earliest entry. Unparseable entries are
/// skipped; `None` means nothing parseable was given.
///
/// ```
/// use pystrap::versions::select_largest;
///
/// let versions = ["3.9.1", "3.10.0", "3.9.12"].map(String::from);
/// assert_eq!(select_largest(&versions).as_deref(), Some("3.10.0"));
/// ```
pub fn select_largest(versions: &[String]) -> Option<String> {
    let mut best: Option<(VersionTriple, &String)> = None;

    for version in versions {
        let Some(triple) = VersionTriple::parse(version) else {
            continue;
        };
        match best {
            Some((current, _)) if triple <= current => {}
            _ => best = Some((triple, version)),
        }
    }

    best.map(|(_, version)| version.clone())
}

/// First entry, in listing order, whose name starts with `project`.
///
/// The match is a plain prefix test: project `app` also matches an unrelated
/// environment named `app-legacy` if it is listed first.
///
/// # Errors
///
/// [`PystrapError::EnvironmentNotFound`] if no entry matches.
pub fn find_project_environment(project: &str, versions: &[String]) -> Result<String> {
    versions
        .iter()
        .find(|v| v.starts_with(project))
        .cloned()
        .ok_or_else(|| PystrapError::EnvironmentNotFound {
            project: project.to_string(),
        })
}

/// Version manager queries bound to a runner and a manager command.
///
/// Each query runs the manager exactly once; nothing is cached.
pub struct VersionSelector<'a> {
    runner: &'a dyn CommandRunner,
    command: CommandSpec,
}

impl<'a> VersionSelector<'a> {
    /// Create a selector running `command` through `runner`.
    pub fn new(runner: &'a dyn CommandRunner, command: CommandSpec) -> Self {
        Self { runner, command }
    }

    /// Raw listing from the version manager.
    pub fn installed(&self) -> Result<Vec<String>> {
        list_installed_versions(self.runner, &self.command)
    }

    /// Largest installed `3.x.y` release.
    pub fn latest_python3(&self) -> Result<String> {
        let candidates = filter_python3(&self.installed()?)?;
        select_largest(&candidates).ok_or(PystrapError::NoMatchingVersion)
    }

    /// First installed environment prefixed by `project`.
    pub fn project_environment(&self, project: &str) -> Result<String> {
        find_project_environment(project, &self.installed()?)
    }
}
