//! Minimal reader for git-style `key = value` config files.
//!
//! Only what identity resolution needs: the first assignment of a key,
//! regardless of section.

/// Split a config line into a trimmed `(key, value)` pair.
///
/// The value is everything after the first `=`, so URLs containing `=` are
/// kept intact. Comments, section headers and blank lines yield `None`.
pub fn parse_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') || line.starts_with('[')
    {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// Value of the first assignment to `key`, if any.
pub fn first_value<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    contents
        .lines()
        .filter_map(parse_assignment)
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
