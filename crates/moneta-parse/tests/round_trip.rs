//! Property tests: a value formatted in any of the four supported shapes
//! resolves back to the original (amount, ISO code) pair.

use proptest::prelude::*;

use moneta_model::{MoneyRecord, MoneyValue};
use moneta_parse::MoneyParser;
use moneta_standards::SymbolTable;

/// Glyph/code pairs that are stable in the embedded reference metadata.
const SYMBOLS: &[(char, &str)] = &[
    ('£', "GBP"),
    ('€', "EUR"),
    ('$', "USD"),
    ('¥', "JPY"),
    ('₹', "INR"),
    ('₩', "KRW"),
];

fn parser() -> MoneyParser {
    let symbols = SymbolTable::load_default().expect("load embedded metadata");
    MoneyParser::new(&symbols).expect("compile parser")
}

fn resolve(text: &str) -> MoneyRecord {
    parser()
        .resolve(&MoneyValue::from(text), None, false)
        .unwrap_or_else(|e| panic!("{text}: {e}"))
}

fn amount_from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

proptest! {
    #[test]
    fn symbol_prefix_round_trips(cents in -999_999i64..=999_999, idx in 0usize..SYMBOLS.len()) {
        let (glyph, code) = SYMBOLS[idx];
        let sign = if cents < 0 { "-" } else { "" };
        let text = format!("{sign}{glyph}{:.2}", amount_from_cents(cents.abs()));
        prop_assert_eq!(resolve(&text), MoneyRecord::new(amount_from_cents(cents), code));
    }

    #[test]
    fn code_prefix_round_trips(cents in -999_999i64..=999_999, code in "[A-Z]{3}", spaced in any::<bool>()) {
        let separator = if spaced { " " } else { "" };
        let text = format!("{code}{separator}{:.2}", amount_from_cents(cents));
        prop_assert_eq!(resolve(&text), MoneyRecord::new(amount_from_cents(cents), code));
    }

    #[test]
    fn code_suffix_round_trips(cents in -999_999i64..=999_999, code in "[A-Z]{3}", spaced in any::<bool>()) {
        let separator = if spaced { " " } else { "" };
        let text = format!("{:.2}{separator}{code}", amount_from_cents(cents));
        prop_assert_eq!(resolve(&text), MoneyRecord::new(amount_from_cents(cents), code));
    }

    #[test]
    fn symbol_suffix_round_trips(cents in -999_999i64..=999_999, idx in 0usize..SYMBOLS.len(), spaced in any::<bool>()) {
        let (glyph, code) = SYMBOLS[idx];
        let separator = if spaced { " " } else { "" };
        let text = format!("{:.2}{separator}{glyph}", amount_from_cents(cents));
        prop_assert_eq!(resolve(&text), MoneyRecord::new(amount_from_cents(cents), code));
    }
}
