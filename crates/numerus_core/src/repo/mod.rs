//! Repository contracts and SQLite implementation for stored numerals.
//!
//! # Invariants
//! - Write paths only accept already-validated `RomanNumeral` values.
//! - Read paths re-validate persisted text instead of trusting the store.

pub mod numeral_repo;
