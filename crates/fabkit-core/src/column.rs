//! Dotted column identifiers (`"relation.column"`).

const SEPARATOR: char = '.';

/// Returns the relation part of `column`: everything before the first `.`,
/// or the whole string when there is no dot.
pub fn get_column_root_relation(column: &str) -> &str {
    match column.split_once(SEPARATOR) {
        Some((root, _)) => root,
        None => column,
    }
}

/// Returns the segment right after the first `.`, or the whole string when there
/// is no dot.
///
/// Only that one segment is returned: `"a.b.c"` yields `"b"`.
pub fn get_column_leaf(column: &str) -> &str {
    column.split(SEPARATOR).nth(1).unwrap_or(column)
}

pub fn is_column_dotted(column: &str) -> bool {
    column.contains(SEPARATOR)
}
