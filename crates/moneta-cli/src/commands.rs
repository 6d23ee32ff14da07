use std::fs::File;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use polars::prelude::{CsvReadOptions, CsvWriter, SerReader, SerWriter};
use tracing::{info, warn};

use moneta_model::{ConvertOptions, MoneyBatch, MoneyValue};
use moneta_parse::{Conversion, MoneyParser, batch_to_frame, column_to_values};
use moneta_standards::{SymbolTable, load_currency_entries};

use crate::cli::ConvertArgs;

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let parser = MoneyParser::with_default_symbols().context("build currency symbol table")?;

    let values = gather_values(args)?;
    if values.is_empty() {
        bail!("no values to convert; pass VALUE arguments or --input");
    }
    info!(count = values.len(), "converting values");

    let options = ConvertOptions {
        default_currency: args.default_currency.clone(),
        errors: args.errors.into(),
    };
    let outcome = parser
        .convert(values.clone(), &options)
        .context("convert values")?;

    match outcome {
        Conversion::Converted(batch) => {
            if let Some(path) = &args.output {
                write_batch_csv(&batch, path)?;
                println!("Wrote {} records to {}", batch.len(), path.display());
            } else {
                print_records(&values, &batch);
            }
        }
        Conversion::Ignored { values, .. } => {
            warn!("conversion abandoned under --errors ignore; input returned unchanged");
            println!(
                "{} value(s) returned unconverted (--errors ignore)",
                values.len()
            );
        }
    }
    Ok(())
}

pub fn run_symbols() -> Result<()> {
    let entries = load_currency_entries().context("load reference metadata")?;
    let table = SymbolTable::from_entries(&entries);

    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Symbol"),
        header_cell("Code"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut out);
    for (glyph, code) in table.iter() {
        let name = entries
            .iter()
            .find(|e| e.code == code && e.symbol.chars().next() == Some(glyph))
            .map(|e| e.name.clone())
            .unwrap_or_default();
        out.add_row(vec![glyph.to_string(), code.to_string(), name]);
    }
    println!("{out}");
    Ok(())
}

fn gather_values(args: &ConvertArgs) -> Result<Vec<MoneyValue>> {
    if let Some(path) = &args.input {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.clone()))
            .with_context(|| format!("open CSV: {}", path.display()))?
            .finish()
            .with_context(|| format!("read CSV: {}", path.display()))?;
        let column = match &args.column {
            Some(name) => df
                .column(name)
                .with_context(|| format!("column {name:?} not found in {}", path.display()))?,
            None => df
                .get_columns()
                .first()
                .with_context(|| format!("no columns in {}", path.display()))?,
        };
        return Ok(column_to_values(column));
    }
    Ok(args
        .values
        .iter()
        .map(|v| MoneyValue::Text(v.clone()))
        .collect())
}

fn write_batch_csv(batch: &MoneyBatch, path: &std::path::Path) -> Result<()> {
    let mut frame = batch_to_frame(batch)?;
    let mut file =
        File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut frame)
        .with_context(|| format!("write CSV: {}", path.display()))?;
    Ok(())
}

fn print_records(values: &[MoneyValue], batch: &MoneyBatch) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Amount"),
        header_cell("Currency"),
    ]);
    apply_table_style(&mut table);
    for (value, record) in values.iter().zip(&batch.records) {
        let (amount, currency) = if record.is_missing() {
            ("<missing>".to_string(), String::new())
        } else {
            (
                moneta_model::format_amount(record.amount),
                record.currency.clone(),
            )
        };
        table.add_row(vec![value.to_string(), amount, currency]);
    }
    println!("{table}");
    if let Some(code) = &batch.default_currency {
        println!("Default currency: {code}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
