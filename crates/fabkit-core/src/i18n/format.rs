//! `%(name)s`-style named interpolation.

use std::collections::BTreeMap;

/// Substitution values keyed by placeholder name.
pub type Variables = BTreeMap<String, String>;

const CONVERSIONS: [char; 4] = ['s', 'd', 'i', 'r'];

/// Replaces `%(name)X` placeholders (X one of `s`, `d`, `i`, `r`) with values from
/// `variables` and `%%` with `%`. `r` inserts the value quoted like a Python string
/// repr (`'Ada'`).
///
/// Placeholders naming a missing variable, and anything else after a lone `%`, are
/// copied through unchanged.
pub fn interpolate(template: &str, variables: &Variables) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("%%") {
            out.push('%');
            rest = &tail[2..];
            continue;
        }

        match parse_placeholder(tail) {
            Some((name, conversion, len)) => {
                match variables.get(name) {
                    Some(value) if conversion == 'r' => out.push_str(&repr(value)),
                    Some(value) => out.push_str(value),
                    None => {
                        tracing::warn!("no value for placeholder %({}) in {:?}", name, template);
                        out.push_str(&tail[..len]);
                    }
                }
                rest = &tail[len..];
            }
            None => {
                out.push('%');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parses `%(name)X` at the head of `s`, returning the name, conversion and byte length.
fn parse_placeholder(s: &str) -> Option<(&str, char, usize)> {
    let body = s.strip_prefix("%(")?;
    let close = body.find(')')?;
    let name = &body[..close];
    let conversion = body[close + 1..].chars().next()?;
    if !CONVERSIONS.contains(&conversion) {
        return None;
    }
    Some((name, conversion, 2 + close + 1 + conversion.len_utf8()))
}

/// Single-quoted unless the value holds `'` and no `"`; backslash, the quote and
/// `\n`/`\r`/`\t` are escaped.
fn repr(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
