//! # ridematch-core — Foundational Types for the Ridematch Platform
//!
//! This crate is the bedrock of the ridematch workspace. It defines the
//! domain primitives shared by every other crate; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **One jurisdiction enum.** `Jurisdiction` has 51 variants (50 states
//!    plus DC), exhaustive `match` everywhere. Adding a jurisdiction forces
//!    every consumer — most importantly the license format table — to handle
//!    it at compile time.
//!
//! 2. **Canonical codes only.** Parsing is case-sensitive over the uppercase
//!    USPS two-letter codes. There is no fuzzy matching and no silent case
//!    folding that could loosen a controlled vocabulary.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ridematch-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod jurisdiction;

// Re-export primary types for ergonomic imports.
pub use error::JurisdictionParseError;
pub use jurisdiction::{Jurisdiction, JURISDICTION_COUNT};
