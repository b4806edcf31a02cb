//! Roman symbol units and their integer values.
//!
//! # Responsibility
//! - Define the 13 canonical units shared by validation and conversion.
//! - Provide glyph -> value and value -> glyph lookups.
//!
//! # Invariants
//! - Units are ordered by strictly descending value.
//! - Glyphs and values are pairwise distinct, so both lookups are total
//!   inverses of each other over the unit set.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One Roman glyph sequence (one or two letters) with its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolUnit {
    pub glyph: &'static str,
    pub value: u16,
}

impl SymbolUnit {
    const fn new(glyph: &'static str, value: u16) -> Self {
        Self { glyph, value }
    }

    /// Two-letter units (`CM`, `IV`, ...) encode subtractive notation.
    pub fn is_subtractive(self) -> bool {
        self.glyph.len() == 2
    }

    /// `D`, `L` and `V`: single-letter units worth five times a power of ten.
    pub fn is_five_like(self) -> bool {
        !self.is_subtractive() && self.value / self.base_magnitude() == 5
    }

    /// Largest power of ten not above the unit's value.
    ///
    /// Bounds the unit that may follow: `M` -> 1000, `D`/`CD`/`CM` -> 100,
    /// `V`/`IV`/`IX` -> 1.
    pub fn base_magnitude(self) -> u16 {
        10u16.pow(self.value.ilog10())
    }
}

/// Canonical units, largest value first.
pub const SYMBOL_UNITS: [SymbolUnit; 13] = [
    SymbolUnit::new("M", 1000),
    SymbolUnit::new("CM", 900),
    SymbolUnit::new("D", 500),
    SymbolUnit::new("CD", 400),
    SymbolUnit::new("C", 100),
    SymbolUnit::new("XC", 90),
    SymbolUnit::new("L", 50),
    SymbolUnit::new("XL", 40),
    SymbolUnit::new("X", 10),
    SymbolUnit::new("IX", 9),
    SymbolUnit::new("V", 5),
    SymbolUnit::new("IV", 4),
    SymbolUnit::new("I", 1),
];

static SYMBOL_TABLE: Lazy<SymbolTable> = Lazy::new(SymbolTable::build);

/// Immutable lookup tables derived from [`SYMBOL_UNITS`].
#[derive(Debug)]
pub struct SymbolTable {
    by_glyph: HashMap<&'static str, u16>,
    by_value: HashMap<u16, &'static str>,
}

impl SymbolTable {
    /// Returns the process-wide table.
    pub fn global() -> &'static SymbolTable {
        &SYMBOL_TABLE
    }

    fn build() -> Self {
        let by_glyph: HashMap<_, _> = SYMBOL_UNITS
            .iter()
            .map(|unit| (unit.glyph, unit.value))
            .collect();
        let by_value: HashMap<_, _> = SYMBOL_UNITS
            .iter()
            .map(|unit| (unit.value, unit.glyph))
            .collect();

        assert_eq!(by_glyph.len(), SYMBOL_UNITS.len(), "symbol glyphs must be unique");
        assert_eq!(by_value.len(), SYMBOL_UNITS.len(), "symbol values must be unique");
        assert!(
            by_glyph
                .iter()
                .all(|(glyph, value)| by_value.get(value) == Some(glyph)),
            "symbol lookups must be inverse of each other"
        );

        Self { by_glyph, by_value }
    }

    /// Ordered units, largest value first.
    pub fn units(&self) -> &'static [SymbolUnit] {
        &SYMBOL_UNITS
    }

    pub fn value_of(&self, glyph: &str) -> Option<u16> {
        self.by_glyph.get(glyph).copied()
    }

    pub fn glyph_of(&self, value: u16) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    /// Returns the unit with the longest glyph that prefixes `text`.
    pub fn longest_unit_at(&self, text: &str) -> Option<SymbolUnit> {
        SYMBOL_UNITS
            .iter()
            .filter(|unit| text.starts_with(unit.glyph))
            .max_by_key(|unit| unit.glyph.len())
            .copied()
    }
}
