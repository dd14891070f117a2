//! # ridematch-license — Driver License Validation Engine
//!
//! Validates the driver license data a user submits when registering as
//! a driver: legal name, issuing jurisdiction, expiration date, and the
//! license number itself checked against a per-jurisdiction format
//! table covering all 50 states plus DC.
//!
//! ## Key Design Principles
//!
//! 1. **Rejections are data.** Every failed check becomes an entry in a
//!    field-keyed [`ValidationReport`]; the engine never returns a Rust
//!    error and never panics on any input. An empty report means the
//!    submission is valid.
//!
//! 2. **Declarative format table.** Each jurisdiction's accepted shapes
//!    are `'static` data built from typed segments (letter runs, digit
//!    runs, literals), matched directly. No regex dialect, nothing to
//!    compile at runtime, and the exhaustive `match` over
//!    [`Jurisdiction`](ridematch_core::Jurisdiction) means a new
//!    jurisdiction cannot ship without format rules.
//!
//! 3. **Deterministic messages.** Per-field checks run in a fixed order
//!    and the first failure wins, so the same input always produces the
//!    same message. Messages are user-facing copy, preserved verbatim.
//!
//! 4. **Pure functions only.** No I/O, no clock access except in the
//!    thin wrappers that supply "today" to the expiration check, which
//!    take the reference date explicitly in their `_at` forms for
//!    testing.
//!
//! ## Crate Policy
//!
//! - Depends only on `ridematch-core` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod expiry;
pub mod name;
pub mod number;
pub mod report;
pub mod rules;
pub mod validate;

// Re-export the public surface callers actually use.
pub use expiry::{
    validate_license_expiration, validate_license_expiration_at, MIN_DAYS_UNTIL_EXPIRATION,
};
pub use name::validate_legal_name;
pub use number::validate_license_number;
pub use report::{ValidationField, ValidationReport, FIELD_COUNT};
pub use rules::{matches_format, patterns_for, LicensePattern, Segment};
pub use validate::{
    validate_driver_license, validate_driver_license_at, validate_issuing_state,
    DriverLicenseInput,
};
