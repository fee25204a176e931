//! Operand pre-filter for the calculator.
//!
//! A cheap character-class check run before numeric conversion. It only
//! rejects operands with no numeric content at all; stricter checking is
//! left to `parse_number`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches any character that is not a letter, whitespace, dot or bracket.
    static ref NUMERIC_CONTENT: Regex = Regex::new(r"[^a-zA-Z\s.(){}]").unwrap();
}

/// Check if an operand could hold a number.
///
/// Returns `false` for operands made only of letters, whitespace, dots and
/// brackets (`"abc"`, `"( . )"`). Anything with a digit or sign passes, even
/// if it later fails to parse (`"3a"`).
pub fn looks_like_operand(input: &str) -> bool {
    NUMERIC_CONTENT.is_match(input)
}

/// Check every operand that was actually provided.
///
/// Empty operands count as "not provided" and are skipped here; callers
/// decide separately whether a missing operand is an error.
pub fn provided_operands_valid<'a>(operands: impl IntoIterator<Item = &'a str>) -> bool {
    operands
        .into_iter()
        .filter(|op| !op.is_empty())
        .all(looks_like_operand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_accepted() {
        assert!(looks_like_operand("3"));
        assert!(looks_like_operand("1.5"));
        assert!(looks_like_operand("-2"));
        assert!(looks_like_operand(" 42 "));
    }

    #[test]
    fn test_letters_rejected() {
        assert!(!looks_like_operand("a"));
        assert!(!looks_like_operand("hello world"));
        assert!(!looks_like_operand("(.)"));
        assert!(!looks_like_operand("   "));
    }

    #[test]
    fn test_mixed_passes_filter() {
        // Rejected later by parse_number
        assert!(looks_like_operand("3a"));
    }

    #[test]
    fn test_empty_operands_skipped() {
        assert!(provided_operands_valid(["3", ""]));
        assert!(provided_operands_valid(["", ""]));
        assert!(!provided_operands_valid(["3", "b"]));
    }
}
