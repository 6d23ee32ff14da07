use moneta_model::{MoneyError, MoneyRecord, MoneyValue, Scalar};
use moneta_parse::MoneyParser;
use moneta_standards::SymbolTable;

fn parser() -> MoneyParser {
    let symbols = SymbolTable::load_default().expect("load embedded metadata");
    MoneyParser::new(&symbols).expect("compile parser")
}

#[test]
fn resolves_each_textual_shape() {
    let parser = parser();
    let cases = [
        ("£128", 128.0, "GBP"),
        ("-£123.00", -123.0, "GBP"),
        ("129 EUR", 129.0, "EUR"),
        ("EUR 123", 123.0, "EUR"),
        ("97GBP", 97.0, "GBP"),
        ("-123.00 £", -123.0, "GBP"),
        ("$19.99", 19.99, "USD"),
        ("€.50", 0.5, "EUR"),
    ];
    for (text, amount, currency) in cases {
        let record = parser
            .resolve(&MoneyValue::from(text), None, false)
            .unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(record, MoneyRecord::new(amount, currency), "{text}");
    }
}

#[test]
fn pre_resolved_records_pass_through_unchanged() {
    let parser = parser();
    let record = MoneyRecord::new(42.5, "EUR");
    let once = parser
        .resolve(&MoneyValue::Record(record.clone()), None, false)
        .expect("first resolve");
    assert_eq!(once, record);
    let twice = parser
        .resolve(&MoneyValue::Record(once.clone()), None, false)
        .expect("second resolve");
    assert_eq!(twice, once);
}

#[test]
fn null_like_inputs_resolve_to_zero_empty_under_every_policy() {
    let parser = parser();
    for coerce in [false, true] {
        for value in [
            MoneyValue::Null,
            MoneyValue::from(""),
            MoneyValue::from("   "),
            MoneyValue::Float(f64::NAN),
        ] {
            let record = parser
                .resolve(&value, Some("GBP"), coerce)
                .expect("null-like resolves");
            assert_eq!(record, MoneyRecord::null());
        }
    }
}

#[test]
fn rich_money_objects_extract_directly() {
    let parser = parser();
    let record = parser
        .resolve(&MoneyValue::from((12.5, "CHF")), None, false)
        .expect("money object resolves");
    assert_eq!(record, MoneyRecord::new(12.5, "CHF"));
}

#[test]
fn pairs_convert_both_elements() {
    let parser = parser();
    let value = MoneyValue::Pair(Scalar::Text("12.5".to_string()), Scalar::Text("NOK".to_string()));
    let record = parser.resolve(&value, None, false).expect("pair resolves");
    assert_eq!(record, MoneyRecord::new(12.5, "NOK"));
}

#[test]
fn broken_pairs_fall_through_without_panicking() {
    let parser = parser();
    let value = MoneyValue::Pair(Scalar::Text("twelve".to_string()), Scalar::Null);
    let err = parser.resolve(&value, Some("GBP"), false).unwrap_err();
    assert!(matches!(err, MoneyError::UnparseableValue { .. }));
    let record = parser.resolve(&value, None, true).expect("coerce");
    assert!(record.is_missing());
}

#[test]
fn bare_numbers_pick_up_the_default_currency() {
    let parser = parser();
    let record = parser
        .resolve(&MoneyValue::Int(128), Some("GBP"), false)
        .expect("int with default");
    assert_eq!(record, MoneyRecord::new(128.0, "GBP"));
    let record = parser
        .resolve(&MoneyValue::from("131"), Some("GBP"), false)
        .expect("numeric text with default");
    assert_eq!(record, MoneyRecord::new(131.0, "GBP"));
}

#[test]
fn bare_numbers_without_default_raise_currency_undetermined() {
    let parser = parser();
    let err = parser
        .resolve(&MoneyValue::Int(128), None, false)
        .unwrap_err();
    assert!(matches!(err, MoneyError::CurrencyUndetermined { .. }));
    assert!(err.to_string().contains("128"));
}

#[test]
fn bare_numbers_without_default_coerce_to_missing() {
    let parser = parser();
    let record = parser
        .resolve(&MoneyValue::Int(128), None, true)
        .expect("coerce");
    assert!(record.is_missing());
}

#[test]
fn unparseable_values_name_the_input() {
    let parser = parser();
    let err = parser
        .resolve(&MoneyValue::from("not money"), Some("GBP"), false)
        .unwrap_err();
    assert!(matches!(err, MoneyError::UnparseableValue { .. }));
    assert!(err.to_string().contains("not money"));
}

#[test]
fn first_matching_rule_wins() {
    let parser = parser();
    // "EUR 123" could superficially feed later rules; the code-prefix rule
    // must claim it first and keep the literal code.
    let record = parser
        .resolve(&MoneyValue::from("EUR 123"), Some("GBP"), false)
        .expect("resolves");
    assert_eq!(record.currency, "EUR");
}

#[test]
fn duplicate_glyph_uses_first_reference_code() {
    let parser = parser();
    // ¥ maps to both JPY and CNY in the reference metadata; first seen wins.
    let record = parser
        .resolve(&MoneyValue::from("¥500"), None, false)
        .expect("resolves");
    assert_eq!(record, MoneyRecord::new(500.0, "JPY"));
}
