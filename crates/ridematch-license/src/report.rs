//! # Field-Keyed Validation Verdicts
//!
//! Validation outcomes are data, not errors. A [`ValidationReport`] maps
//! each failed input field to exactly one human-readable message; an
//! empty report means the input passed every check. Callers inspect the
//! report and decide how to surface messages, so nothing here is tied to
//! a particular UI or transport.
//!
//! Fields have a canonical order (the order of [`ValidationField::ALL`])
//! and the report iterates, displays, and serializes in that order
//! regardless of insertion order, so output is deterministic.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Number of input fields the engine validates.
pub const FIELD_COUNT: usize = 4;

/// An input field of the driver license form.
///
/// The serde form is the camelCase wire name used by form handlers,
/// matching [`ValidationField::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidationField {
    /// The driver's legal name.
    #[serde(rename = "legalName")]
    LegalName,
    /// The license number.
    #[serde(rename = "licenseNumber")]
    LicenseNumber,
    /// The license expiration date.
    #[serde(rename = "licenseExpirationDate")]
    LicenseExpirationDate,
    /// The issuing jurisdiction code.
    #[serde(rename = "issuingState")]
    IssuingState,
}

impl ValidationField {
    /// All fields in canonical order.
    pub const ALL: [ValidationField; FIELD_COUNT] = [
        ValidationField::LegalName,
        ValidationField::LicenseNumber,
        ValidationField::LicenseExpirationDate,
        ValidationField::IssuingState,
    ];

    /// Returns the camelCase wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationField::LegalName => "legalName",
            ValidationField::LicenseNumber => "licenseNumber",
            ValidationField::LicenseExpirationDate => "licenseExpirationDate",
            ValidationField::IssuingState => "issuingState",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate verdict of a driver license validation run.
///
/// At most one message per field; the first rejection recorded for a
/// field wins and later ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(ValidationField, String)>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rejection for a field unless one is already present.
    pub fn insert(&mut self, field: ValidationField, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    /// Returns `true` when no field was rejected.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the message recorded for a field, if any.
    pub fn get(&self, field: ValidationField) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    /// Returns the first rejection in canonical field order.
    pub fn first(&self) -> Option<(ValidationField, &str)> {
        ValidationField::ALL
            .iter()
            .find_map(|&field| self.get(field).map(|m| (field, m)))
    }

    /// Iterates rejections in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (ValidationField, &str)> {
        ValidationField::ALL
            .iter()
            .filter_map(move |&field| self.get(field).map(|m| (field, m)))
    }

    /// Consumes the report, yielding its entries in canonical field order.
    pub fn into_inner(self) -> Vec<(ValidationField, String)> {
        let mut entries = self.entries;
        entries.sort_by_key(|(field, _)| *field);
        entries
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "valid");
        }
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, message) in self.iter() {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}
