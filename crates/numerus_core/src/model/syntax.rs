//! Classical Roman numeral syntax validation.
//!
//! # Responsibility
//! - Decide whether a normalized string is a well-formed Roman numeral.
//! - Explain every rejection with the exact substrings responsible.
//!
//! # Invariants
//! - Input is expected to be normalized (no whitespace, uppercase).
//! - Alphabet and repetition problems are all collected before returning;
//!   symbol order is only checked once both pass.
//! - Validation is a pure function of its input.

use crate::model::symbol::SymbolTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest canonical numeral in range (`MMMDCCCLXXXVIII`).
pub const MAX_NUMERAL_LEN: usize = 15;

static NON_ROMAN_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^MDCLXVI]").expect("valid alphabet regex"));
static BASE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"M{4,}|C{4,}|X{4,}|I{4,}").expect("valid base run regex"));
// Greedy `.*` spans from the first occurrence of the symbol to its last.
static FIVE_LIKE_REPEAT_RES: Lazy<[Regex; 3]> = Lazy::new(|| {
    ["D.*D", "L.*L", "V.*V"].map(|pattern| Regex::new(pattern).expect("valid five-like regex"))
});

/// One distinct reason a numeral was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxProblem {
    Empty,
    TooLong { len: usize, max: usize },
    /// Offending characters, deduplicated in order of first appearance.
    InvalidCharacters(String),
    /// A run of four or more `M`, `C`, `X` or `I`.
    ExcessiveRun(String),
    /// Span between two occurrences of the same `D`, `L` or `V`.
    RepeatedFiveLike(String),
    /// Symbols present in an order no numeral can take.
    IllegalOrder(String),
}

impl Display for SyntaxProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "numeral must not be empty"),
            Self::TooLong { len, max } => {
                write!(f, "numeral is too long: {len} symbols (max {max})")
            }
            Self::InvalidCharacters(chars) => write!(f, "invalid characters: {chars}"),
            Self::ExcessiveRun(run) => {
                write!(f, "symbol repeated more than 3 times in a row: {run}")
            }
            Self::RepeatedFiveLike(span) => {
                write!(f, "symbol D, L or V used more than once: {span}")
            }
            Self::IllegalOrder(numeral) => write!(f, "illegal symbol order: {numeral}"),
        }
    }
}

/// Rejection of a candidate numeral, carrying every problem found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub numeral: String,
    pub problems: Vec<SyntaxProblem>,
}

impl SyntaxError {
    fn new(numeral: &str, problems: Vec<SyntaxProblem>) -> Self {
        Self {
            numeral: numeral.to_string(),
            problems,
        }
    }

    pub fn has_problem(&self, predicate: impl Fn(&SyntaxProblem) -> bool) -> bool {
        self.problems.iter().any(predicate)
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid roman numeral `{}`: ", self.numeral)?;
        for (index, problem) in self.problems.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

impl Error for SyntaxError {}

/// Returns whether `normalized` is a well-formed numeral.
pub fn is_valid_syntax(normalized: &str) -> bool {
    validate_syntax(normalized).is_ok()
}

/// Validates a normalized candidate numeral.
///
/// # Errors
/// - `Empty` / `TooLong` short-circuit every other check.
/// - Alphabet and repetition problems are reported together.
/// - `IllegalOrder` is reported alone, naming the whole numeral.
pub fn validate_syntax(normalized: &str) -> Result<(), SyntaxError> {
    let len = normalized.chars().count();
    if len == 0 {
        return Err(SyntaxError::new(normalized, vec![SyntaxProblem::Empty]));
    }
    if len > MAX_NUMERAL_LEN {
        return Err(SyntaxError::new(
            normalized,
            vec![SyntaxProblem::TooLong {
                len,
                max: MAX_NUMERAL_LEN,
            }],
        ));
    }

    let mut problems = Vec::new();
    if let Some(problem) = invalid_characters(normalized) {
        problems.push(problem);
    }
    problems.extend(
        BASE_RUN_RE
            .find_iter(normalized)
            .map(|run| SyntaxProblem::ExcessiveRun(run.as_str().to_string())),
    );
    problems.extend(
        FIVE_LIKE_REPEAT_RES
            .iter()
            .filter_map(|re| re.find(normalized))
            .map(|span| SyntaxProblem::RepeatedFiveLike(span.as_str().to_string())),
    );
    problems.dedup();
    if !problems.is_empty() {
        return Err(SyntaxError::new(normalized, problems));
    }

    if !has_legal_order(normalized) {
        return Err(SyntaxError::new(
            normalized,
            vec![SyntaxProblem::IllegalOrder(normalized.to_string())],
        ));
    }
    Ok(())
}

fn invalid_characters(normalized: &str) -> Option<SyntaxProblem> {
    let mut seen = String::new();
    for found in NON_ROMAN_CHAR_RE.find_iter(normalized) {
        if !seen.contains(found.as_str()) {
            seen.push_str(found.as_str());
        }
    }
    (!seen.is_empty()).then_some(SyntaxProblem::InvalidCharacters(seen))
}

/// Splits the numeral into longest-match units and checks each unit stays
/// under the ceiling left by the one before it.
///
/// After `M`/`C`/`X`/`I` or `D`/`L`/`V` the next unit may be worth at most the
/// preceding power of ten; after a subtractive pair it must be worth less.
fn has_legal_order(normalized: &str) -> bool {
    let table = SymbolTable::global();
    let mut rest = normalized;
    let mut ceiling = u16::MAX;

    while !rest.is_empty() {
        let Some(unit) = table.longest_unit_at(rest) else {
            return false;
        };
        if unit.value > ceiling {
            return false;
        }
        ceiling = if unit.is_subtractive() {
            unit.base_magnitude() - 1
        } else {
            unit.base_magnitude()
        };
        rest = &rest[unit.glyph.len()..];
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{is_valid_syntax, validate_syntax, SyntaxProblem, MAX_NUMERAL_LEN};
    use crate::model::convert::{integer_to_numeral, numeral_to_integer, MAX_VALUE};

    const ALPHABET: [char; 7] = ['M', 'D', 'C', 'L', 'X', 'V', 'I'];

    fn problems(numeral: &str) -> Vec<SyntaxProblem> {
        validate_syntax(numeral)
            .expect_err("numeral should be rejected")
            .problems
    }

    #[test]
    fn accepts_canonical_numerals() {
        for numeral in [
            "I", "IV", "IX", "XIV", "XL", "XLII", "XC", "CD", "CM", "MCMLXIV", "MMXV",
            "MMMCMXCIX", "MMMDCCCLXXXVIII", "CLXXII", "CCCXC", "DLIV",
        ] {
            assert!(is_valid_syntax(numeral), "{numeral} should be accepted");
        }
    }

    #[test]
    fn rejects_empty_and_overlong_input_first() {
        assert_eq!(problems(""), vec![SyntaxProblem::Empty]);
        assert_eq!(
            problems(&"M".repeat(35)),
            vec![SyntaxProblem::TooLong {
                len: 35,
                max: MAX_NUMERAL_LEN
            }]
        );
    }

    #[test]
    fn reports_invalid_characters_once_each() {
        assert_eq!(
            problems("PPFXC-"),
            vec![SyntaxProblem::InvalidCharacters("PF-".to_string())]
        );
    }

    #[test]
    fn base_runs_of_three_pass_and_four_fail() {
        for symbol in ['M', 'C', 'X', 'I'] {
            assert!(is_valid_syntax(&symbol.to_string().repeat(3)));
            let run = symbol.to_string().repeat(4);
            assert_eq!(problems(&run), vec![SyntaxProblem::ExcessiveRun(run.clone())]);
        }
    }

    #[test]
    fn five_like_repeats_report_first_to_last_span() {
        assert_eq!(
            problems("DDXII"),
            vec![SyntaxProblem::RepeatedFiveLike("DD".to_string())]
        );
        assert_eq!(
            problems("DXID"),
            vec![SyntaxProblem::RepeatedFiveLike("DXID".to_string())]
        );
        assert_eq!(
            problems("VIV"),
            vec![SyntaxProblem::RepeatedFiveLike("VIV".to_string())]
        );
    }

    #[test]
    fn collects_independent_problems_together() {
        let found = problems("CCCCLLQ");
        assert!(found.contains(&SyntaxProblem::InvalidCharacters("Q".to_string())));
        assert!(found.contains(&SyntaxProblem::ExcessiveRun("CCCC".to_string())));
        assert!(found.contains(&SyntaxProblem::RepeatedFiveLike("LL".to_string())));

        let message = validate_syntax("CCCCLLQ").unwrap_err().to_string();
        assert!(message.contains("invalid characters: Q"));
        assert!(message.contains("CCCC"));
        assert!(message.contains("LL"));
    }

    #[test]
    fn rejects_illegal_order_with_whole_numeral() {
        for numeral in [
            "MMCMIIIX", "IIX", "IXI", "CMC", "XCX", "IL", "IC", "XM", "VX", "IIV", "CCM", "XCL",
        ] {
            assert_eq!(
                problems(numeral),
                vec![SyntaxProblem::IllegalOrder(numeral.to_string())],
                "{numeral} should be rejected for its order"
            );
        }
    }

    #[test]
    fn rejects_lowercase_because_input_must_be_normalized() {
        assert_eq!(
            problems("xl"),
            vec![SyntaxProblem::InvalidCharacters("xl".to_string())]
        );
    }

    fn assert_canonical(numeral: &str) {
        let value = numeral_to_integer(numeral);
        assert_eq!(
            integer_to_numeral(i32::from(value)).as_deref(),
            Ok(numeral),
            "{numeral} is accepted but is not the canonical form of {value}"
        );
    }

    #[test]
    fn every_accepted_short_string_is_canonical() {
        let mut layer = vec![String::new()];
        for _ in 0..6 {
            layer = layer
                .iter()
                .flat_map(|prefix| ALPHABET.into_iter().map(move |symbol| format!("{prefix}{symbol}")))
                .collect();
            for candidate in layer.iter().filter(|candidate| is_valid_syntax(candidate)) {
                assert_canonical(candidate);
            }
        }
    }

    // Canonical numerals are closed under prefixes, so extending only
    // accepted strings reaches every accepted string up to the length limit.
    #[test]
    fn accepted_strings_are_exactly_the_canonical_numerals() {
        let mut accepted = 0usize;
        let mut pending = vec![String::new()];
        while let Some(prefix) = pending.pop() {
            for symbol in ALPHABET {
                let candidate = format!("{prefix}{symbol}");
                if is_valid_syntax(&candidate) {
                    assert!(candidate.len() <= MAX_NUMERAL_LEN);
                    assert_canonical(&candidate);
                    accepted += 1;
                    pending.push(candidate);
                }
            }
        }
        assert_eq!(accepted, usize::from(MAX_VALUE));
    }
}
