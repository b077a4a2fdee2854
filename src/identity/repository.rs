//! Repository remote discovery and URL normalization.

use super::gitconfig::first_value;
use super::names::ProjectNames;

/// Project names derived from a repository remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub names: ProjectNames,
    pub url: String,
}

/// Normalize a remote URL to a browsable `https` form.
///
/// - a trailing `.git` is stripped
/// - `git@host:path` becomes `https://host/path`
/// - `http`/`https` URLs pass through unchanged
/// - anything else yields an empty string
///
/// ```
/// use pystrap::identity::normalize_remote_url;
///
/// assert_eq!(
///     normalize_remote_url("git@github.com:user/repo.git"),
///     "https://github.com/user/repo"
/// );
/// assert_eq!(normalize_remote_url("ftp://x/y"), "");
/// ```
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.strip_suffix(".git").unwrap_or(url);

    if let Some(rest) = url.strip_prefix("git@") {
        format!("https://{}", rest.replace(':', "/"))
    } else if url.starts_with("http") {
        url.to_string()
    } else {
        String::new()
    }
}

/// Canonical URL of the first `url = ...` assignment in a repository config.
///
/// Returns an empty string when there is no assignment or the scheme is not
/// recognized.
pub fn repository_url(repository_config: &str) -> String {
    first_value(repository_config, "url")
        .map(normalize_remote_url)
        .unwrap_or_default()
}

/// Derive project names from the repository config, if it names a usable remote.
///
/// `None` means the caller falls back to the working directory: the config is
/// absent, has no recognizable remote, or the URL ends without a path segment.
pub fn resolve_from_repository(repository_config: Option<&str>) -> Option<RepositoryIdentity> {
    let url = repository_url(repository_config?);
    let segment = url.rsplit('/').next().unwrap_or_default();

    if url.is_empty() || segment.is_empty() {
        return None;
    }

    Some(RepositoryIdentity {
        names: ProjectNames::from_token(segment),
        url,
    })
}
