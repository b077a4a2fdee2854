//! Development dependency table.

use serde::{Deserialize, Serialize};

/// One development dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevPackage {
    /// Package name on the index.
    pub name: String,

    /// Pinned version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Git source; when set it replaces `name`/`version` in the specifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
}

impl DevPackage {
    /// Package installed by name at the latest version.
    pub fn latest(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: None,
            git: None,
        }
    }

    /// Package pinned to `version`.
    pub fn pinned(name: &str, version: &str) -> Self {
        Self {
            version: Some(version.to_string()),
            ..Self::latest(name)
        }
    }

    /// Package installed from a git repository.
    pub fn from_git(name: &str, url: &str) -> Self {
        Self {
            git: Some(url.to_string()),
            ..Self::latest(name)
        }
    }

    /// Specifier as passed to `poetry add`.
    ///
    /// ```
    /// use pystrap::scaffold::DevPackage;
    ///
    /// assert_eq!(DevPackage::pinned("flake8", "4.0.1").specifier(), "flake8=4.0.1");
    /// assert_eq!(
    ///     DevPackage::from_git("tool", "https://example.com/tool.git").specifier(),
    ///     "git+https://example.com/tool.git"
    /// );
    /// ```
    pub fn specifier(&self) -> String {
        match (&self.git, &self.version) {
            (Some(git), _) => format!("git+{git}"),
            (None, Some(version)) => format!("{}={}", self.name, version),
            (None, None) => self.name.clone(),
        }
    }
}

/// The built-in development dependencies of a bootstrapped project.
pub fn default_dev_packages() -> Vec<DevPackage> {
    vec![
        DevPackage::latest("black"),
        DevPackage::pinned("flake8", "4.0.1"),
        DevPackage::latest("coverage"),
        DevPackage::latest("mypy"),
        DevPackage::latest("pytest"),
        DevPackage::latest("pytest-flake8"),
        DevPackage::latest("pytest-cov"),
        DevPackage::latest("pytest-mypy"),
        DevPackage::latest("sphinx"),
        DevPackage::pinned("sphinx-rtd-theme", "1.2.0rc2"),
        DevPackage::from_git(
            "sphinx-pyproject-poetry",
            "https://github.com/tetutaro/sphinx_pyproject_poetry.git",
        ),
        DevPackage::latest("python-lsp-server"),
    ]
}

/// Space-joined specifiers of the built-in table followed by `extra`.
pub fn dev_package_line(extra: &[DevPackage]) -> String {
    default_dev_packages()
        .iter()
        .chain(extra)
        .map(DevPackage::specifier)
        .collect::<Vec<_>>()
        .join(" ")
}
