#![deny(unsafe_code)]

//! The currency symbol lookup table.

use std::collections::BTreeMap;

use tracing::debug;

use crate::entries::{CurrencyEntry, load_currency_entries};
use crate::error::StandardsError;

/// Glyphs that would corrupt the numeric regular expressions downstream and
/// are therefore never admitted as symbols.
pub const EXCLUDED_GLYPHS: [char; 2] = ['.', '/'];

/// Maps a single non-alphabetic glyph ("£", "$", "€") to its ISO 4217 code.
///
/// Built once from the reference metadata at startup and read-only after
/// construction; safe to share across threads without locking.
///
/// Invariants: every key is non-alphabetic and not in [`EXCLUDED_GLYPHS`].
/// Duplicate glyphs across reference entries resolve first-seen-wins, so the
/// table is deterministic in reference row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    glyphs: BTreeMap<char, String>,
}

impl SymbolTable {
    /// Builds the table from reference entries.
    ///
    /// Entries whose code is absent or malformed are skipped rather than
    /// raising: the reference metadata is externally sourced and not
    /// guaranteed exhaustively consistent.
    pub fn from_entries(entries: &[CurrencyEntry]) -> Self {
        let mut glyphs = BTreeMap::new();
        for entry in entries {
            let Some(glyph) = entry.symbol.chars().next() else {
                continue;
            };
            if !is_valid_code(&entry.code) {
                debug!(symbol = %entry.symbol, code = %entry.code, "skipping entry without a resolvable code");
                continue;
            }
            if glyph.is_alphabetic() || EXCLUDED_GLYPHS.contains(&glyph) {
                continue;
            }
            glyphs
                .entry(glyph)
                .or_insert_with(|| entry.code.clone());
        }
        Self { glyphs }
    }

    /// Builds the table from the embedded reference metadata.
    pub fn load_default() -> Result<Self, StandardsError> {
        Ok(Self::from_entries(&load_currency_entries()?))
    }

    /// Looks up the ISO code for a glyph.
    pub fn resolve(&self, glyph: char) -> Option<&str> {
        self.glyphs.get(&glyph).map(String::as_str)
    }

    /// All admitted glyphs, in deterministic order.
    pub fn glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    /// (glyph, code) pairs, in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.glyphs.iter().map(|(g, c)| (*g, c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// A resolvable code is exactly three ASCII uppercase letters.
fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::{SymbolTable, is_valid_code};
    use crate::entries::CurrencyEntry;

    fn entry(symbol: &str, code: &str) -> CurrencyEntry {
        CurrencyEntry {
            symbol: symbol.to_string(),
            code: code.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn duplicate_glyphs_resolve_first_seen_wins() {
        let table =
            SymbolTable::from_entries(&[entry("¥", "JPY"), entry("¥", "CNY")]);
        assert_eq!(table.resolve('¥'), Some("JPY"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn alphabetic_and_excluded_glyphs_are_dropped() {
        let table = SymbolTable::from_entries(&[
            entry("kr", "SEK"),
            entry(".د.ب", "BHD"),
            entry("/-", "KES"),
            entry("£", "GBP"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve('£'), Some("GBP"));
    }

    #[test]
    fn unresolvable_codes_are_skipped_not_fatal() {
        let table = SymbolTable::from_entries(&[entry("₧", ""), entry("₰", "DE")]);
        assert!(table.is_empty());
    }

    #[test]
    fn code_validity() {
        assert!(is_valid_code("GBP"));
        assert!(!is_valid_code("GB"));
        assert!(!is_valid_code("gbp"));
        assert!(!is_valid_code(""));
    }
}
