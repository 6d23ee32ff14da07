//! Hand-off between resolved batches and columnar (polars) storage.
//!
//! The columnar container itself is an external collaborator; this module
//! only builds the two-column frame it consumes and lifts raw CSV columns
//! into [`MoneyValue`]s for conversion.

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};

use moneta_model::{MoneyBatch, MoneyValue};

/// Builds the (amount, currency) frame consumed by columnar storage.
///
/// Missing-sentinel records become null slots in both columns; null records
/// keep their zero amount and empty currency.
pub fn batch_to_frame(batch: &MoneyBatch) -> Result<DataFrame> {
    let mut amounts: Vec<Option<f64>> = Vec::with_capacity(batch.len());
    let mut currencies: Vec<Option<String>> = Vec::with_capacity(batch.len());
    for record in &batch.records {
        if record.is_missing() {
            amounts.push(None);
            currencies.push(None);
        } else {
            amounts.push(Some(record.amount));
            currencies.push(Some(record.currency.clone()));
        }
    }
    let columns: Vec<Column> = vec![
        Series::new("amount".into(), amounts).into(),
        Series::new("currency".into(), currencies).into(),
    ];
    DataFrame::new(columns).context("build money dataframe")
}

/// Lifts a raw column into resolver inputs, one value per row.
pub fn column_to_values(column: &Column) -> Vec<MoneyValue> {
    (0..column.len())
        .map(|idx| any_to_value(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Maps a Polars value onto the matching input shape.
fn any_to_value(value: AnyValue<'_>) -> MoneyValue {
    match value {
        AnyValue::Null => MoneyValue::Null,
        AnyValue::Int8(v) => MoneyValue::Int(i64::from(v)),
        AnyValue::Int16(v) => MoneyValue::Int(i64::from(v)),
        AnyValue::Int32(v) => MoneyValue::Int(i64::from(v)),
        AnyValue::Int64(v) => MoneyValue::Int(v),
        AnyValue::UInt8(v) => MoneyValue::Int(i64::from(v)),
        AnyValue::UInt16(v) => MoneyValue::Int(i64::from(v)),
        AnyValue::UInt32(v) => MoneyValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => MoneyValue::Int(v as i64),
        AnyValue::Float32(v) => MoneyValue::Float(f64::from(v)),
        AnyValue::Float64(v) => MoneyValue::Float(v),
        AnyValue::String(s) => MoneyValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => MoneyValue::Text(s.to_string()),
        other => MoneyValue::Text(other.to_string()),
    }
}
