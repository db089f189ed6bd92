//! Case-sensitive shell-style wildcard matching for host patterns.
//!
//! Supported tokens: `*` (any run, including empty), `?` (one character),
//! `[seq]` / `[!seq]` (character set with `a-z` ranges). An unterminated `[`
//! matches itself.

/// Returns true if all of `name` matches `pattern`.
pub fn fnmatch(name: &str, pattern: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    matches_chars(&name, &pattern)
}

fn matches_chars(name: &[char], pat: &[char]) -> bool {
    let (mut n, mut p) = (0, 0);
    // Pattern index after the last `*` and the name index it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pat.len() {
            if pat[p] == '*' {
                p += 1;
                backtrack = Some((p, n));
                continue;
            }
            if let Some(width) = single_token(&pat[p..], name[n]) {
                p += width;
                n += 1;
                continue;
            }
        }
        match backtrack {
            Some((star_p, star_n)) => {
                p = star_p;
                n = star_n + 1;
                backtrack = Some((star_p, n));
            }
            None => return false,
        }
    }

    pat[p..].iter().all(|&c| c == '*')
}

/// Matches one non-`*` token at the head of `pat` against `ch`.
/// Returns the token's width in the pattern on success.
fn single_token(pat: &[char], ch: char) -> Option<usize> {
    match pat[0] {
        '?' => Some(1),
        '[' => match char_class(pat, ch) {
            Some((true, width)) => Some(width),
            Some((false, _)) => None,
            None => (ch == '[').then_some(1),
        },
        c => (c == ch).then_some(1),
    }
}

/// Evaluates a `[...]` class at the head of `pat`. `None` means the class is
/// unterminated and `[` is literal.
fn char_class(pat: &[char], ch: char) -> Option<(bool, usize)> {
    let mut j = 1;
    let negate = pat.get(j) == Some(&'!');
    if negate {
        j += 1;
    }
    let start = j;
    // A `]` right after the opener is a member, not the terminator.
    if pat.get(j) == Some(&']') {
        j += 1;
    }
    while j < pat.len() && pat[j] != ']' {
        j += 1;
    }
    if j >= pat.len() {
        return None;
    }

    let set = &pat[start..j];
    let mut found = false;
    let mut k = 0;
    while k < set.len() {
        if k + 2 < set.len() && set[k + 1] == '-' {
            found |= set[k] <= ch && ch <= set[k + 2];
            k += 3;
        } else {
            found |= set[k] == ch;
            k += 1;
        }
    }
    Some((found != negate, j + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal() {
        assert!(fnmatch("example.com", "example.com"));
        assert!(!fnmatch("example.com", "example.org"));
        assert!(!fnmatch("example.com", "example.co"));
        assert!(fnmatch("", ""));
    }

    #[test]
    fn case_sensitive() {
        assert!(!fnmatch("Example.com", "example.com"));
    }

    #[test]
    fn star() {
        assert!(fnmatch("api.example.com", "*.example.com"));
        assert!(fnmatch("a.b.example.com", "*.example.com"));
        assert!(!fnmatch("example.com", "*.example.com"));
        assert!(!fnmatch("evil.com", "*.example.com"));
        assert!(fnmatch("anything", "*"));
        assert!(fnmatch("", "*"));
        assert!(fnmatch("localhost:5000", "localhost:*"));
        assert!(fnmatch("abcbc", "a*bc"));
    }

    #[test]
    fn star_does_not_stop_at_dots() {
        // Shell globbing has no notion of labels.
        assert!(fnmatch("evil.com.example.com", "*.example.com"));
    }

    #[test]
    fn question_mark() {
        assert!(fnmatch("app1.example.com", "app?.example.com"));
        assert!(!fnmatch("app12.example.com", "app?.example.com"));
    }

    #[test]
    fn classes() {
        assert!(fnmatch("app3.test", "app[0-9].test"));
        assert!(!fnmatch("appx.test", "app[0-9].test"));
        assert!(fnmatch("appx.test", "app[!0-9].test"));
        assert!(fnmatch("b", "[abc]"));
        assert!(fnmatch("]", "[]a]"));
        assert!(fnmatch("-", "[a-]"));
    }

    #[test]
    fn unterminated_class_is_literal() {
        assert!(fnmatch("[abc", "[abc"));
        assert!(!fnmatch("a", "[abc"));
    }
}
