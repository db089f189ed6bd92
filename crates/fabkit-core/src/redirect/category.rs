//! Unicode "Other" (C*) general category detection.

use unicode_general_category::{get_general_category, GeneralCategory};

/// True for control (Cc), format (Cf), surrogate (Cs), private-use (Co) and
/// unassigned (Cn) code points.
pub fn is_other_category(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}
