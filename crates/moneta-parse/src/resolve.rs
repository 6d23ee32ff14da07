//! Per-value resolution of raw inputs into canonical money records.

use moneta_model::{MoneyError, MoneyRecord, MoneyValue};
use moneta_standards::SymbolTable;

use crate::patterns::{CurrencyToken, PatternError, PatternSet};

/// The resolution pipeline: a compiled pattern set plus the symbol table it
/// was built from.
///
/// Built once at startup and immutable afterwards; resolution is a pure
/// function of the input, so a parser can be shared across threads freely.
#[derive(Debug)]
pub struct MoneyParser {
    patterns: PatternSet,
    symbols: SymbolTable,
}

impl MoneyParser {
    /// Compiles a parser against a symbol table.
    pub fn new(symbols: &SymbolTable) -> Result<Self, PatternError> {
        Ok(Self {
            patterns: PatternSet::compile(symbols)?,
            symbols: symbols.clone(),
        })
    }

    /// Builds a parser from the embedded reference metadata.
    pub fn with_default_symbols() -> anyhow::Result<Self> {
        let symbols = SymbolTable::load_default()?;
        Ok(Self::new(&symbols)?)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Resolves one raw value into a record.
    ///
    /// Branches are tried in a fixed order: pre-resolved records pass
    /// through, null-like inputs become the zero/empty record, rich money
    /// objects and well-formed pairs are taken structurally, text goes
    /// through the pattern rules, and anything left that still reads as a
    /// bare number picks up `default_currency`. With `coerce` set, failures
    /// come back as [`MoneyRecord::missing`] instead of errors.
    pub fn resolve(
        &self,
        value: &MoneyValue,
        default_currency: Option<&str>,
        coerce: bool,
    ) -> Result<MoneyRecord, MoneyError> {
        if value.is_null_like() {
            return Ok(MoneyRecord::null());
        }

        let determined = match value {
            MoneyValue::Record(record) => Some(record.clone()),
            MoneyValue::Null => Some(MoneyRecord::null()),
            MoneyValue::Money { amount, currency } => {
                Some(MoneyRecord::new(*amount, currency.clone()))
            }
            MoneyValue::Text(text) => self.resolve_text(text),
            MoneyValue::Int(_) | MoneyValue::Float(_) => None,
            MoneyValue::Pair(amount, code) => match (amount.as_amount(), code.as_code()) {
                (Some(amount), Some(code)) => Some(MoneyRecord::new(amount, code)),
                _ => None,
            },
        };
        if let Some(record) = determined {
            return Ok(record);
        }

        if let Some(amount) = bare_number(value) {
            if let Some(code) = default_currency {
                return Ok(MoneyRecord::new(amount, code));
            }
            if coerce {
                return Ok(MoneyRecord::missing());
            }
            return Err(MoneyError::CurrencyUndetermined {
                value: value.to_string(),
            });
        }

        if coerce {
            return Ok(MoneyRecord::missing());
        }
        Err(MoneyError::UnparseableValue {
            value: value.to_string(),
        })
    }

    /// Runs the pattern rules over a candidate string and resolves symbol
    /// tokens through the table.
    fn resolve_text(&self, text: &str) -> Option<MoneyRecord> {
        let (amount, token) = self.patterns.first_match(text)?;
        let currency = match token {
            CurrencyToken::Symbol(glyph) => self.symbols.resolve(glyph)?.to_string(),
            CurrencyToken::Code(code) => code,
        };
        Some(MoneyRecord::new(amount, currency))
    }
}

/// Attempts to read the entire raw value as a bare number, for the
/// default-currency fallback.
fn bare_number(value: &MoneyValue) -> Option<f64> {
    match value {
        MoneyValue::Int(v) => Some(*v as f64),
        MoneyValue::Float(v) => Some(*v),
        MoneyValue::Text(text) => text.trim().parse::<f64>().ok(),
        MoneyValue::Record(_)
        | MoneyValue::Null
        | MoneyValue::Money { .. }
        | MoneyValue::Pair(_, _) => None,
    }
}
