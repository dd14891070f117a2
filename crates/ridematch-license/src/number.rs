//! # License Number Validation
//!
//! State-aware validation of the license number itself. The checks run
//! in a fixed order so a given input always produces the same message:
//! presence, resolved jurisdiction, whitespace, character class, format
//! match against the jurisdiction's pattern table, then two fraud
//! heuristics.
//!
//! The fraud heuristics are intentionally narrow. They catch the two
//! most common lazy-fake entries (a single repeated character and an
//! exact consecutive run such as "1234567") without flagging
//! legitimately patterned real numbers.
//!
//! This validator does not re-check the jurisdiction code. The caller
//! resolves it first and passes the result; `None` here means the
//! issuing-state field failed independently and the number cannot be
//! checked against any format table.

use ridematch_core::Jurisdiction;

use crate::rules::matches_format;

const MSG_REQUIRED: &str = "License number is required for driver registration.";
const MSG_NO_JURISDICTION: &str = "Issuing state is required to validate license number.";
const MSG_WHITESPACE: &str = "License number must not include whitespace.";
const MSG_SPECIAL_CHARS: &str = "License number must not include special characters.";
const MSG_REPEATED: &str = "License number cannot be a repeated sequence.";
const MSG_SEQUENTIAL: &str = "License number cannot be an obvious sequence.";

fn format_mismatch(jurisdiction: Jurisdiction) -> String {
    format!(
        "License number does not match the required format for {}.",
        jurisdiction.as_str()
    )
}

/// Returns `true` when every character of a multi-character string is
/// the same character. Single characters are not a "sequence".
fn is_repeated_sequence(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => s.chars().count() >= 2 && chars.all(|c| c == first),
        None => false,
    }
}

/// Returns `true` when the string is a strictly consecutive run, either
/// ascending or descending, over a single character class.
///
/// Purely numeric runs ("123456", "654321") and purely alphabetic runs
/// ("ABCDEF", compared case-insensitively) qualify. Mixed letter/digit
/// strings never qualify, and neither do single characters.
fn is_consecutive_run(s: &str) -> bool {
    let folded: Vec<u32> = if s.chars().all(|c| c.is_ascii_digit()) {
        s.chars().map(u32::from).collect()
    } else if s.chars().all(|c| c.is_ascii_alphabetic()) {
        s.chars().map(|c| u32::from(c.to_ascii_uppercase())).collect()
    } else {
        return false;
    };

    if folded.len() < 2 {
        return false;
    }

    let ascending = folded.windows(2).all(|w| w[1] == w[0] + 1);
    let descending = folded.windows(2).all(|w| w[1] + 1 == w[0]);
    ascending || descending
}

/// Validates a license number against the resolved issuing jurisdiction.
///
/// Returns `None` when the number is acceptable and `Some(message)` with
/// the first applicable rejection otherwise. Leading and trailing
/// whitespace is ignored; interior whitespace is rejected outright.
pub fn validate_license_number(
    raw: Option<&str>,
    jurisdiction: Option<Jurisdiction>,
) -> Option<String> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Some(MSG_REQUIRED.to_string());
    }

    let jurisdiction = match jurisdiction {
        Some(j) => j,
        None => return Some(MSG_NO_JURISDICTION.to_string()),
    };

    if trimmed.chars().any(char::is_whitespace) {
        return Some(MSG_WHITESPACE.to_string());
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(MSG_SPECIAL_CHARS.to_string());
    }
    if !matches_format(jurisdiction, trimmed) {
        return Some(format_mismatch(jurisdiction));
    }
    if is_repeated_sequence(trimmed) {
        return Some(MSG_REPEATED.to_string());
    }
    if is_consecutive_run(trimmed) {
        return Some(MSG_SEQUENTIAL.to_string());
    }

    None
}
