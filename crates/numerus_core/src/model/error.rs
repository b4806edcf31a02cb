//! Errors raised by numeral construction, conversion and access.

use crate::model::syntax::SyntaxError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NumeralResult<T> = Result<T, NumeralError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// The mutator received no string at all.
    NullInput,
    Format(SyntaxError),
    OutOfRange(i64),
    /// Character or substring access outside the text. A single character
    /// at `index` is reported as `index..index + 1`.
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

impl Display for NumeralError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullInput => write!(f, "numeral input must not be null"),
            Self::Format(err) => write!(f, "{err}"),
            Self::OutOfRange(value) => write!(
                f,
                "value {value} cannot be written as a roman numeral (expected 0..=3999)"
            ),
            Self::OutOfBounds { start, end, len } => write!(
                f,
                "range {start}..{end} is out of bounds for numeral of length {len}"
            ),
        }
    }
}

impl Error for NumeralError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SyntaxError> for NumeralError {
    fn from(value: SyntaxError) -> Self {
        Self::Format(value)
    }
}
