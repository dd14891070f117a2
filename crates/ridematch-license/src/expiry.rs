//! # License Expiration Validation
//!
//! A driver's license must remain valid for a minimum window beyond the
//! day of registration, so a license expiring tomorrow cannot be used to
//! register today. The window is a product policy constant, not a
//! technical limit.
//!
//! Day arithmetic happens at midnight boundaries: both the expiration
//! date and "today" are calendar dates, so `today + 7 days` passes and
//! `today + 6 days` fails with no time-of-day ambiguity.
//!
//! The core routine takes the reference date explicitly so tests can
//! pin it; [`validate_license_expiration`] supplies the current UTC
//! date for production callers.

use chrono::{NaiveDate, Utc};

/// Minimum number of whole days between today and the expiration date.
pub const MIN_DAYS_UNTIL_EXPIRATION: i64 = 7;

/// Date serialization accepted from callers.
const DATE_FORMAT: &str = "%Y-%m-%d";

const MSG_REQUIRED: &str = "License expiration date is required.";
const MSG_TOO_SOON: &str = "License expiration date must be at least 7 days in the future.";

/// Validates an expiration date against the current UTC date.
pub fn validate_license_expiration(raw: Option<&str>) -> Option<String> {
    validate_license_expiration_at(raw, Utc::now().date_naive())
}

/// Validates an expiration date against an explicit reference date.
///
/// Missing, blank, or unparsable input is reported as a missing date;
/// the caller's form layer is expected to serialize dates as
/// `YYYY-MM-DD`, and anything else is indistinguishable from no answer.
pub fn validate_license_expiration_at(raw: Option<&str>, today: NaiveDate) -> Option<String> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    let expiration = match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => return Some(MSG_REQUIRED.to_string()),
    };

    let days_until = expiration.signed_duration_since(today).num_days();
    if days_until < MIN_DAYS_UNTIL_EXPIRATION {
        return Some(MSG_TOO_SOON.to_string());
    }

    None
}
