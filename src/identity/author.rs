//! Author identity from the user's git configuration.

use super::gitconfig::first_value;

/// Used when neither the git config nor `USER` provides a name.
pub const FALLBACK_AUTHOR: &str = "name";

/// Compose the author string written into `pyproject.toml`.
///
/// - `name` and `email` present: `name<email>`
/// - only `name`: `name`
/// - no config, or no non-empty `name`: `env_user`, else [`FALLBACK_AUTHOR`]
pub fn resolve_author(user_config: Option<&str>, env_user: Option<&str>) -> String {
    let fallback = || env_user.unwrap_or(FALLBACK_AUTHOR).to_string();

    let Some(contents) = user_config else {
        return fallback();
    };

    let name = first_value(contents, "name").unwrap_or_default();
    let email = first_value(contents, "email").unwrap_or_default();

    match (name.is_empty(), email.is_empty()) {
        (true, _) => fallback(),
        (false, true) => name.to_string(),
        (false, false) => format!("{name}<{email}>"),
    }
}
