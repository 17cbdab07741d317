//! Parsing helpers for the textual selectors accepted by the crate.
//!
//! Property models and correlation versions are plain enums, but callers
//! often receive them as strings (command-line flags, configuration files).
//! Each selector implements [`FromStr`](std::str::FromStr) through
//! [`parse_keyword`] and reports unrecognized text as [`UnknownModelError`].

use thiserror::Error;

/// An unrecognized selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`, expected one of: {expected}")]
pub struct UnknownModelError {
    /// What was being selected, e.g. "property model".
    pub kind: &'static str,

    /// The text that failed to parse.
    pub value: String,

    /// Comma-separated list of accepted keywords.
    pub expected: String,
}

/// Matches `text` against keyword aliases, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`UnknownModelError`] when no alias matches.
pub(crate) fn parse_keyword<T: Copy>(
    kind: &'static str,
    text: &str,
    table: &[(&str, T)],
) -> Result<T, UnknownModelError> {
    let needle = text.trim().to_ascii_lowercase();
    table
        .iter()
        .find(|(keyword, _)| *keyword == needle)
        .map(|&(_, value)| value)
        .ok_or_else(|| UnknownModelError {
            kind,
            value: text.to_string(),
            expected: table
                .iter()
                .map(|(keyword, _)| *keyword)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
