//! Python runtime version triples.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Installed CPython 3 releases as listed by the version manager.
///
/// Two-component versions, pre-releases (`3.12.0rc1`), other majors and
/// named environments do not match.
static PYTHON3_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^3\.[0-9]+\.[0-9]+$").expect("PYTHON3_PATTERN must compile")
});

/// Whether `candidate` is a plain `3.<minor>.<patch>` release.
pub fn is_python3_release(candidate: &str) -> bool {
    PYTHON3_PATTERN.is_match(candidate)
}

/// A `major.minor.patch` version compared numerically.
///
/// Field order makes the derived `Ord` lexicographic over
/// (major, minor, patch), so `3.10.0 > 3.9.12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Parse exactly three dot-separated non-negative integers.
    ///
    /// ```
    /// use pystrap::versions::VersionTriple;
    ///
    /// let v = VersionTriple::parse("3.10.4").unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (3, 10, 4));
    /// assert!(VersionTriple::parse("3.10").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('.');
        let major = parse_component(parts.next()?)?;
        let minor = parse_component(parts.next()?)?;
        let patch = parse_component(parts.next()?)?;

        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// The `major.minor` series, as used for `python = "^3.11"`.
    pub fn series(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

/// The `major.minor` prefix of a listed release, as pinned by `python = "^3.11"`.
///
/// Anything that is not a version triple is returned unchanged.
///
/// ```
/// use pystrap::versions::python_series;
///
/// assert_eq!(python_series("3.12.1"), "3.12");
/// ```
pub fn python_series(version: &str) -> String {
    VersionTriple::parse(version)
        .map(|v| v.series())
        .unwrap_or_else(|| version.to_string())
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
