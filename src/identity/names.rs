//! Canonical project/package name pairs.

use std::path::Path;

use serde::Serialize;

/// The two spellings of one project token.
///
/// `project` uses hyphens (distribution name), `package` uses underscores
/// (importable module name). Both always come from the same source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectNames {
    pub project: String,
    pub package: String,
}

impl ProjectNames {
    /// Derive both spellings from a directory name or URL path segment.
    pub fn from_token(token: &str) -> Self {
        Self {
            project: token.replace('_', "-"),
            package: token.replace('-', "_"),
        }
    }

    /// Derive names from the final component of `dir`.
    ///
    /// A path with no final component (such as `/`) yields empty names.
    pub fn from_working_directory(dir: &Path) -> Self {
        let token = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_token(&token)
    }
}

/// Names derived from the basename of the working directory.
pub fn resolve_from_working_directory(dir: &Path) -> ProjectNames {
    ProjectNames::from_working_directory(dir)
}
