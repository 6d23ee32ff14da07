use moneta_standards::{EXCLUDED_GLYPHS, SymbolTable, load_currency_entries};

#[test]
fn default_table_builds_from_embedded_metadata() {
    let table = SymbolTable::load_default().expect("load embedded metadata");
    assert!(!table.is_empty());
    assert_eq!(table.resolve('£'), Some("GBP"));
    assert_eq!(table.resolve('€'), Some("EUR"));
    assert_eq!(table.resolve('$'), Some("USD"));
    assert_eq!(table.resolve('¥'), Some("JPY"));
}

#[test]
fn every_glyph_is_non_alphabetic_and_not_excluded() {
    let table = SymbolTable::load_default().expect("load embedded metadata");
    for glyph in table.glyphs() {
        assert!(!glyph.is_alphabetic(), "alphabetic glyph admitted: {glyph:?}");
        assert!(
            !EXCLUDED_GLYPHS.contains(&glyph),
            "excluded glyph admitted: {glyph:?}"
        );
    }
}

#[test]
fn alphabetic_reference_symbols_never_reach_the_table() {
    // "kr", "zł" and friends exist in the reference metadata but must be
    // filtered on their leading character.
    let entries = load_currency_entries().expect("load embedded metadata");
    assert!(entries.iter().any(|e| e.symbol == "kr"));
    let table = SymbolTable::load_default().expect("load embedded metadata");
    assert_eq!(table.resolve('k'), None);
    assert_eq!(table.resolve('z'), None);
}

#[test]
fn lookups_are_deterministic_across_builds() {
    let first = SymbolTable::load_default().expect("load embedded metadata");
    let second = SymbolTable::load_default().expect("load embedded metadata");
    assert_eq!(first, second);
}
