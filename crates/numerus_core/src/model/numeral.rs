//! Validated Roman numeral container.
//!
//! # Responsibility
//! - Hold a normalized numeral together with its integer value.
//! - Offer read-only, string-like views over the normalized text.
//!
//! # Invariants
//! - The stored text is either a numeral accepted by
//!   [`validate_syntax`](crate::model::syntax::validate_syntax) or `NULLA`.
//! - `value` is always derived from the stored text, never set on its own.
//! - Every mutation replaces the whole value; a failed mutation leaves the
//!   previous state untouched.

use crate::model::convert::{integer_to_numeral, numeral_to_integer, NULLA};
use crate::model::error::{NumeralError, NumeralResult};
use crate::model::syntax::validate_syntax;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

/// Syntactically valid Roman numeral, or the `NULLA` zero sentinel.
///
/// Serialized as its normalized text; deserializing re-runs validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RomanNumeral {
    numeral: String,
    value: u16,
}

impl RomanNumeral {
    /// Creates the `NULLA` sentinel.
    pub fn new() -> Self {
        Self {
            numeral: NULLA.to_string(),
            value: 0,
        }
    }

    /// Normalizes, validates and converts `raw`.
    ///
    /// `NULLA` in any letter case yields the sentinel.
    ///
    /// # Errors
    /// - `Format` when the normalized text is not a valid numeral.
    pub fn parse(raw: &str) -> NumeralResult<Self> {
        let numeral = normalize(raw);
        if numeral == NULLA {
            return Ok(Self::new());
        }

        validate_syntax(&numeral)?;
        let value = numeral_to_integer(&numeral);
        Ok(Self { numeral, value })
    }

    /// Builds the canonical numeral for `value`; `0` yields the sentinel.
    ///
    /// # Errors
    /// - `OutOfRange` when `value` is outside `0..=3999`.
    pub fn from_value(value: i32) -> NumeralResult<Self> {
        let numeral = integer_to_numeral(value)?;
        Self::parse(&numeral)
    }

    /// Replaces this numeral with `raw`.
    ///
    /// # Errors
    /// - `NullInput` when `raw` is `None`, regardless of current state.
    /// - `Format` when `raw` does not normalize to a valid numeral.
    pub fn set_numeral<'a>(&mut self, raw: impl Into<Option<&'a str>>) -> NumeralResult<()> {
        let raw = raw.into().ok_or(NumeralError::NullInput)?;
        *self = Self::parse(raw)?;
        Ok(())
    }

    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn is_nulla(&self) -> bool {
        self.value == 0
    }

    /// Number of symbols in the normalized text.
    pub fn len(&self) -> usize {
        self.numeral.len()
    }

    /// Always `false`: even the sentinel has text.
    pub fn is_empty(&self) -> bool {
        self.numeral.is_empty()
    }

    /// # Errors
    /// - `OutOfBounds` when `index >= len()`.
    pub fn char_at(&self, index: usize) -> NumeralResult<char> {
        // Stored text is ASCII, so byte and char positions coincide.
        self.numeral
            .as_bytes()
            .get(index)
            .map(|byte| char::from(*byte))
            .ok_or(NumeralError::OutOfBounds {
                start: index,
                end: index.saturating_add(1),
                len: self.len(),
            })
    }

    /// Returns the half-open `range` of the normalized text.
    ///
    /// # Errors
    /// - `OutOfBounds` when `range` is reversed or ends past `len()`.
    pub fn sub_numeral(&self, range: Range<usize>) -> NumeralResult<&str> {
        self.numeral
            .get(range.clone())
            .ok_or(NumeralError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len(),
            })
    }
}

impl Default for RomanNumeral {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RomanNumeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.numeral)
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RomanNumeral> for String {
    fn from(value: RomanNumeral) -> Self {
        value.numeral
    }
}

/// Checks `raw` after normalization without building a container.
pub fn is_correct_roman_syntax(raw: &str) -> bool {
    validate_syntax(&normalize(raw)).is_ok()
}

/// Drops every whitespace character and upcases the rest.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize, RomanNumeral};
    use crate::model::error::NumeralError;
    use crate::model::syntax::SyntaxProblem;

    #[test]
    fn normalize_strips_all_whitespace_and_upcases() {
        assert_eq!(normalize("  \t\n\r   xliI "), "XLII");
        assert_eq!(normalize("  XL I  II"), "XLIII");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn failed_set_keeps_previous_state() {
        let mut roman = RomanNumeral::parse("XLII").unwrap();

        let err = roman.set_numeral("IIII").unwrap_err();
        assert!(matches!(
            err,
            NumeralError::Format(ref syntax)
                if syntax.has_problem(|p| matches!(p, SyntaxProblem::ExcessiveRun(_)))
        ));
        assert_eq!(roman.numeral(), "XLII");
        assert_eq!(roman.value(), 42);

        assert_eq!(roman.set_numeral(None), Err(NumeralError::NullInput));
        assert_eq!(roman.numeral(), "XLII");
    }

    #[test]
    fn sentinel_is_nulla_with_zero_value() {
        let roman = RomanNumeral::default();
        assert!(roman.is_nulla());
        assert_eq!(roman.value(), 0);
        assert_eq!(roman.to_string(), "NULLA");
        assert!(!roman.is_empty());
    }

    #[test]
    fn from_value_builds_canonical_text() {
        assert_eq!(RomanNumeral::from_value(1964).unwrap().numeral(), "MCMLXIV");
        assert!(RomanNumeral::from_value(0).unwrap().is_nulla());
        assert_eq!(
            RomanNumeral::from_value(4000),
            Err(NumeralError::OutOfRange(4000))
        );
    }
}
