//! # Legal Name Validation
//!
//! Checks the driver's legal name as entered on the registration form.
//! The character class is deliberately narrow: ASCII letters, spaces,
//! hyphens, and apostrophes. That covers compound surnames ("Mary-Jane
//! O'Brien") without opening the field to digits or punctuation.
//!
//! Rules run in order and the first failure wins, so callers always get
//! a deterministic message for a given input.

/// Minimum length of a trimmed legal name.
pub const MIN_NAME_LENGTH: usize = 2;

const MSG_REQUIRED: &str = "Legal name is required.";
const MSG_TOO_SHORT: &str = "Legal name must be at least 2 characters long.";
const MSG_BAD_CHARS: &str =
    "Legal name can only include letters, spaces, hyphens, and apostrophes.";
const MSG_NO_LETTER: &str = "Legal name must include at least one letter.";

/// Returns `true` for characters permitted anywhere in a legal name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\''
}

/// Validates a legal name, returning `None` when it is acceptable and
/// `Some(message)` with the first applicable rejection otherwise.
///
/// Leading and trailing whitespace is ignored for every rule; interior
/// spaces are part of the name and must satisfy the character class.
pub fn validate_legal_name(raw: Option<&str>) -> Option<String> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Some(MSG_TOO_SHORT.to_string());
    }

    // Trimmed and non-empty, so a first character exists.
    let first_is_letter = trimmed
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic())
        .unwrap_or(false);
    if !first_is_letter || !trimmed.chars().all(is_name_char) {
        return Some(MSG_BAD_CHARS.to_string());
    }

    // Unreachable while the character class requires a leading letter.
    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Some(MSG_NO_LETTER.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(raw: &str) -> String {
        validate_legal_name(Some(raw)).expect("expected a rejection")
    }

    // ---- acceptance ----

    #[test]
    fn test_plain_name_passes() {
        assert_eq!(validate_legal_name(Some("Alice Johnson")), None);
    }

    #[test]
    fn test_compound_name_passes() {
        assert_eq!(validate_legal_name(Some("Mary-Jane O'Brien")), None);
    }

    #[test]
    fn test_two_letter_name_passes() {
        assert_eq!(validate_legal_name(Some("Bo")), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_legal_name(Some("  Alice Johnson  ")), None);
    }

    // ---- required ----

    #[test]
    fn test_missing_is_required() {
        assert_eq!(validate_legal_name(None).as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(reject(""), MSG_REQUIRED);
    }

    #[test]
    fn test_whitespace_only_is_required() {
        assert_eq!(reject("   \t "), MSG_REQUIRED);
    }

    // ---- length ----

    #[test]
    fn test_single_character_too_short() {
        assert_eq!(reject("A"), MSG_TOO_SHORT);
    }

    #[test]
    fn test_single_character_after_trim_too_short() {
        assert_eq!(reject("  A  "), MSG_TOO_SHORT);
    }

    // ---- character class ----

    #[test]
    fn test_digits_rejected() {
        assert_eq!(reject("123456"), MSG_BAD_CHARS);
    }

    #[test]
    fn test_underscore_rejected() {
        assert_eq!(reject("Mary_Jane"), MSG_BAD_CHARS);
    }

    #[test]
    fn test_leading_hyphen_rejected() {
        assert_eq!(reject("-Alice"), MSG_BAD_CHARS);
    }

    #[test]
    fn test_leading_apostrophe_rejected() {
        assert_eq!(reject("'Brien"), MSG_BAD_CHARS);
    }

    #[test]
    fn test_non_ascii_letter_rejected() {
        assert_eq!(reject("Søren"), MSG_BAD_CHARS);
    }

    #[test]
    fn test_interior_punctuation_rejected() {
        assert_eq!(reject("Alice. Johnson"), MSG_BAD_CHARS);
    }
}
