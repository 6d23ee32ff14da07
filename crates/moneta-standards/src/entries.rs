#![deny(unsafe_code)]

//! Embedded ISO 4217 reference metadata.
//!
//! The reference source ships with the crate as a CSV of symbol/code/name
//! associations. Multiple rows may share a symbol when several currencies
//! use the same glyph; downstream consumers take the first code per glyph.

use crate::error::StandardsError;

const CURRENCY_SYMBOLS_CSV: &str = include_str!("../data/currency_symbols.csv");

/// One reference association between a currency symbol and an ISO code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CurrencyEntry {
    pub symbol: String,
    pub code: String,
    pub name: String,
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn get_string(row: &csv::StringRecord, idx: usize) -> String {
    row.get(idx).unwrap_or("").trim().to_string()
}

fn require_column(headers: &csv::StringRecord, name: &str) -> Result<usize, StandardsError> {
    header_index(headers, name).ok_or_else(|| StandardsError::MissingColumn {
        name: name.to_string(),
    })
}

/// Parses the embedded reference metadata, preserving row order.
pub fn load_currency_entries() -> Result<Vec<CurrencyEntry>, StandardsError> {
    parse_currency_entries(CURRENCY_SYMBOLS_CSV)
}

pub(crate) fn parse_currency_entries(raw: &str) -> Result<Vec<CurrencyEntry>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());
    let headers = reader.headers()?.clone();
    let symbol_idx = require_column(&headers, "symbol")?;
    let code_idx = require_column(&headers, "code")?;
    let name_idx = require_column(&headers, "name")?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let symbol = get_string(&record, symbol_idx);
        if symbol.is_empty() {
            continue;
        }
        entries.push(CurrencyEntry {
            symbol,
            code: get_string(&record, code_idx),
            name: get_string(&record, name_idx),
        });
    }
    Ok(entries)
}
