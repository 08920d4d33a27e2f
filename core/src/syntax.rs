//! Token grammar for short and long option names.

use std::sync::LazyLock;

use regex::Regex;

/// A dash followed by exactly one alphanumeric character (`-a`, `-B`, `-9`).
static SHORT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z0-9]$").expect("static regex must compile"));

/// Two dashes, then alphanumeric words separated by single dashes
/// (`--help`, `--show-hidden-files`).
static LONG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--[a-zA-Z0-9]+(-[a-zA-Z0-9]+)*$").expect("static regex must compile")
});

/// Returns `true` if `name` is a valid short option token.
///
/// # Examples
///
/// ```
/// use opt_schema_core::is_valid_short_name;
///
/// assert!(is_valid_short_name("-v"));
/// assert!(!is_valid_short_name("--v"));
/// ```
pub fn is_valid_short_name(name: &str) -> bool {
    SHORT_NAME_RE.is_match(name)
}

/// Returns `true` if `name` is a valid long option token.
///
/// # Examples
///
/// ```
/// use opt_schema_core::is_valid_long_name;
///
/// assert!(is_valid_long_name("--dry-run"));
/// assert!(!is_valid_long_name("--dry--run"));
/// ```
pub fn is_valid_long_name(name: &str) -> bool {
    LONG_NAME_RE.is_match(name)
}
