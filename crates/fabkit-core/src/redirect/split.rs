//! Scheme and netloc extraction with `urlsplit` semantics.
//!
//! Unlike [`url::Url::parse`], this accepts relative and scheme-relative input
//! and keeps the netloc verbatim (userinfo and port included), which is what host
//! patterns are matched against.

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// The parts of a URL that redirect validation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitUrl {
    /// Lowercased scheme, empty when absent.
    pub scheme: String,
    /// Authority as written (`user@host:port`), empty when absent.
    pub netloc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("authority marker followed by an empty host in {0:?}")]
    EmptyAuthority(String),
    #[error("invalid IPv6 URL: unbalanced brackets in netloc {0:?}")]
    InvalidIpv6(String),
    #[error("netloc {0:?} contains characters that normalize to URL delimiters under NFKC")]
    NormalizedDelimiter(String),
    #[error("invalid authority {netloc:?}: {source}")]
    InvalidAuthority {
        netloc: String,
        #[source]
        source: url::ParseError,
    },
}

fn is_slash(c: char) -> bool {
    c == '/' || c == '\\'
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `input` into scheme and netloc.
///
/// Leading C0 controls and spaces are stripped and tab/CR/LF removed, as browsers
/// do before navigating. A backslash counts as a slash in the `//` authority
/// marker, so `/\host` is read as scheme-relative.
pub fn split_url(input: &str) -> Result<SplitUrl, SplitError> {
    let cleaned: String = input
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut rest = cleaned.as_str();
    let mut parts = SplitUrl::default();

    if let Some((candidate, after)) = rest.split_once(':') {
        if is_scheme(candidate) {
            parts.scheme = candidate.to_ascii_lowercase();
            rest = after;
        }
    }

    let mut chars = rest.chars();
    if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
        if is_slash(a) && is_slash(b) {
            let authority = &rest[2..];
            let end = authority
                .find(|c: char| is_slash(c) || c == '?' || c == '#')
                .unwrap_or(authority.len());
            parts.netloc = authority[..end].to_string();
            if parts.netloc.is_empty() && end < authority.len() && is_slash_at(authority, end) {
                return Err(SplitError::EmptyAuthority(input.to_string()));
            }
        }
    }

    if !parts.netloc.is_empty() {
        validate_netloc(&parts.netloc)?;
    }
    Ok(parts)
}

fn is_slash_at(s: &str, idx: usize) -> bool {
    s[idx..].chars().next().is_some_and(is_slash)
}

fn validate_netloc(netloc: &str) -> Result<(), SplitError> {
    if netloc.contains('[') != netloc.contains(']') {
        return Err(SplitError::InvalidIpv6(netloc.to_string()));
    }
    check_normalized_netloc(netloc)?;
    url::Url::parse(&format!("http://{netloc}/"))
        .map(|_| ())
        .map_err(|source| SplitError::InvalidAuthority {
            netloc: netloc.to_string(),
            source,
        })
}

/// Rejects a non-ASCII netloc whose NFKC form gains one of `/?#@:`, which a
/// normalizing consumer would read as a different host.
fn check_normalized_netloc(netloc: &str) -> Result<(), SplitError> {
    if netloc.is_ascii() {
        return Ok(());
    }
    let stripped: String = netloc
        .chars()
        .filter(|c| !matches!(c, '@' | ':' | '#' | '?'))
        .collect();
    let normalized: String = stripped.nfkc().collect();
    if normalized != stripped && normalized.contains(&['/', '?', '#', '@', ':'][..]) {
        return Err(SplitError::NormalizedDelimiter(netloc.to_string()));
    }
    Ok(())
}
