//! # Aggregate Driver License Validation
//!
//! Single entry point the registration and driver-update handlers call
//! with raw form data. Every field is checked independently, so a bad
//! legal name never hides a bad expiration date, and the full report is
//! available for callers that want to surface more than the first error.
//!
//! The one deliberate coupling: the license-number validator receives
//! the issuing jurisdiction only when the issuing-state field itself
//! passed. When it did not, the number check runs without a jurisdiction
//! and reports its own message, so the caller sees both rejections.
//!
//! Validation is pure and synchronous. No I/O, no shared mutable state;
//! the same input always yields the same report.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ridematch_core::Jurisdiction;

use crate::expiry::validate_license_expiration_at;
use crate::name::validate_legal_name;
use crate::number::validate_license_number;
use crate::report::{ValidationField, ValidationReport};

const MSG_STATE_REQUIRED: &str = "Issuing state is required for driver registration.";
const MSG_STATE_INVALID: &str = "Issuing state must be a valid U.S. state or DC.";

/// Raw driver license form data, exactly as submitted.
///
/// Every field is optional; validation decides what missing means. The
/// serde form uses the camelCase wire names, matching
/// [`ValidationField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverLicenseInput {
    /// The driver's legal name.
    pub legal_name: Option<String>,
    /// The license number.
    pub license_number: Option<String>,
    /// The license expiration date, serialized as `YYYY-MM-DD`.
    pub license_expiration_date: Option<String>,
    /// Two-letter issuing jurisdiction code.
    pub issuing_state: Option<String>,
}

/// Validates an issuing-state code, resolving it to a [`Jurisdiction`].
///
/// Codes are a controlled vocabulary: exactly the 51 canonical
/// two-letter codes, case-sensitive, no fuzzy matching. Callers feed
/// this from a fixed dropdown, so anything else is rejected outright.
pub fn validate_issuing_state(raw: Option<&str>) -> Result<Jurisdiction, String> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Err(MSG_STATE_REQUIRED.to_string());
    }
    trimmed
        .parse::<Jurisdiction>()
        .map_err(|_| MSG_STATE_INVALID.to_string())
}

/// Validates a full driver license submission against the current UTC date.
pub fn validate_driver_license(input: &DriverLicenseInput) -> ValidationReport {
    validate_driver_license_at(input, Utc::now().date_naive())
}

/// Validates a full driver license submission against an explicit
/// reference date.
///
/// Returns a field-keyed report; an empty report means the input passed
/// every check. Never panics and never returns an `Err` of any kind.
pub fn validate_driver_license_at(
    input: &DriverLicenseInput,
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(message) = validate_legal_name(input.legal_name.as_deref()) {
        report.insert(ValidationField::LegalName, message);
    }

    let jurisdiction = match validate_issuing_state(input.issuing_state.as_deref()) {
        Ok(jurisdiction) => Some(jurisdiction),
        Err(message) => {
            report.insert(ValidationField::IssuingState, message);
            None
        }
    };

    if let Some(message) = validate_license_number(input.license_number.as_deref(), jurisdiction) {
        report.insert(ValidationField::LicenseNumber, message);
    }

    if let Some(message) =
        validate_license_expiration_at(input.license_expiration_date.as_deref(), today)
    {
        report.insert(ValidationField::LicenseExpirationDate, message);
    }

    if !report.is_valid() {
        let failed: Vec<&str> = report.iter().map(|(field, _)| field.as_str()).collect();
        debug!(fields = ?failed, "driver license input rejected");
    }

    report
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_input() -> impl Strategy<Value = DriverLicenseInput> {
        (
            proptest::option::of(".{0,40}"),
            proptest::option::of(".{0,40}"),
            proptest::option::of(".{0,40}"),
            proptest::option::of(".{0,10}"),
        )
            .prop_map(
                |(legal_name, license_number, license_expiration_date, issuing_state)| {
                    DriverLicenseInput {
                        legal_name,
                        license_number,
                        license_expiration_date,
                        issuing_state,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_input(input in arbitrary_input()) {
            let today = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
            let report = validate_driver_license_at(&input, today);
            prop_assert!(report.len() <= 4);
        }

        #[test]
        fn valid_reports_have_no_entries(input in arbitrary_input()) {
            let today = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
            let report = validate_driver_license_at(&input, today);
            prop_assert_eq!(report.is_valid(), report.len() == 0);
        }

        #[test]
        fn resolved_state_roundtrips(code in proptest::sample::select(
            ridematch_core::Jurisdiction::ALL.to_vec(),
        )) {
            let resolved = validate_issuing_state(Some(code.as_str()));
            prop_assert_eq!(resolved, Ok(code));
        }
    }
}
