//! Core domain logic for Numerus.
//! This crate is the single source of truth for Roman numeral syntax and
//! conversion rules.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use codec::{load_numeral, read_numeral, save_numeral, write_numeral, CodecError, CodecResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::convert::{integer_to_numeral, MAX_VALUE, NULLA};
pub use model::error::{NumeralError, NumeralResult};
pub use model::numeral::{is_correct_roman_syntax, normalize, RomanNumeral};
pub use model::symbol::{SymbolTable, SymbolUnit, SYMBOL_UNITS};
pub use model::syntax::{
    is_valid_syntax, validate_syntax, SyntaxError, SyntaxProblem, MAX_NUMERAL_LEN,
};
pub use repo::numeral_repo::{
    NumeralId, NumeralRecord, NumeralRepository, RepoError, RepoResult, SqliteNumeralRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
