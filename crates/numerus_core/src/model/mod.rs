//! Roman numeral domain model.
//!
//! # Responsibility
//! - Define the symbol table shared by validation and conversion.
//! - Validate candidate numerals and convert them to and from integers.
//! - Provide the `RomanNumeral` container that enforces both on mutation.
//!
//! # Invariants
//! - Only normalized text (no whitespace, uppercase) is validated or stored.
//! - Conversion from text assumes the text was validated first.

pub mod convert;
pub mod error;
pub mod numeral;
pub mod symbol;
pub mod syntax;
