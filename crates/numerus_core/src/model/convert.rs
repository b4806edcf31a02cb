//! Greedy conversion between numerals and integers.
//!
//! # Invariants
//! - `numeral_to_integer` is only called with validated numerals.
//! - `integer_to_numeral` output always passes syntax validation.

use crate::model::error::{NumeralError, NumeralResult};
use crate::model::symbol::SymbolTable;

/// Text of the zero sentinel.
pub const NULLA: &str = "NULLA";
/// Largest value expressible in classical notation.
pub const MAX_VALUE: u16 = 3999;

/// Sums the units of a validated numeral, largest unit first.
///
/// The sentinel `NULLA` maps to 0. Callers outside the model go through
/// `RomanNumeral::parse`, which validates before converting.
pub(crate) fn numeral_to_integer(validated: &str) -> u16 {
    if validated == NULLA {
        return 0;
    }

    let mut value = 0;
    let mut rest = validated;
    for unit in SymbolTable::global().units() {
        while let Some(stripped) = rest.strip_prefix(unit.glyph) {
            value += unit.value;
            rest = stripped;
        }
    }
    debug_assert!(rest.is_empty(), "unvalidated numeral `{validated}`");
    value
}

/// Writes `value` in canonical subtractive notation.
///
/// # Errors
/// - `OutOfRange` when `value` is negative or above [`MAX_VALUE`].
pub fn integer_to_numeral(value: i32) -> NumeralResult<String> {
    let mut remaining = u16::try_from(value)
        .ok()
        .filter(|value| *value <= MAX_VALUE)
        .ok_or(NumeralError::OutOfRange(i64::from(value)))?;
    if remaining == 0 {
        return Ok(NULLA.to_string());
    }

    let mut numeral = String::new();
    for unit in SymbolTable::global().units() {
        while remaining >= unit.value {
            numeral.push_str(unit.glyph);
            remaining -= unit.value;
        }
    }
    Ok(numeral)
}
