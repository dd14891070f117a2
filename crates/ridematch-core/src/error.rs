//! # Core Error Types
//!
//! Parse errors for the foundational domain types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Validation rejections are NOT represented here — the validation engine
//! reports those as field-keyed data, never as Rust errors.

use thiserror::Error;

/// Error parsing a jurisdiction code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JurisdictionParseError {
    /// The input is not a canonical two-letter jurisdiction code.
    #[error("unknown jurisdiction code: {code:?}")]
    UnknownCode {
        /// The rejected input.
        code: String,
    },
}
