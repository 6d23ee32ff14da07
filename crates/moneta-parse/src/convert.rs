//! Batch conversion over sequences of raw values.

use tracing::debug;

use moneta_model::{ConvertOptions, ErrorPolicy, MoneyBatch, MoneyError, MoneyValue};

use crate::resolve::MoneyParser;

/// Converter input: a sequence of raw values, or a batch that has already
/// been through conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchInput {
    Values(Vec<MoneyValue>),
    Batch(MoneyBatch),
}

impl From<Vec<MoneyValue>> for BatchInput {
    fn from(values: Vec<MoneyValue>) -> Self {
        Self::Values(values)
    }
}

/// A single scalar is treated as a one-element sequence.
impl From<MoneyValue> for BatchInput {
    fn from(value: MoneyValue) -> Self {
        Self::Values(vec![value])
    }
}

impl From<MoneyBatch> for BatchInput {
    fn from(batch: MoneyBatch) -> Self {
        Self::Batch(batch)
    }
}

/// The outcome of a batch conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Records positionally aligned with the input, plus the resolved
    /// default currency code.
    Converted(MoneyBatch),
    /// Under the `ignore` policy a resolution failure abandons conversion
    /// for the whole batch; the original input comes back verbatim with the
    /// unmodified default code.
    Ignored {
        values: Vec<MoneyValue>,
        default_currency: Option<String>,
    },
}

impl Conversion {
    /// The converted batch, if conversion was not abandoned.
    pub fn into_batch(self) -> Option<MoneyBatch> {
        match self {
            Self::Converted(batch) => Some(batch),
            Self::Ignored { .. } => None,
        }
    }
}

impl MoneyParser {
    /// Resolves every element of the input and applies the error policy.
    ///
    /// An input that is already a resolved batch short-circuits unchanged;
    /// its own default currency, when set, wins over the caller's option.
    pub fn convert(
        &self,
        input: impl Into<BatchInput>,
        options: &ConvertOptions,
    ) -> Result<Conversion, MoneyError> {
        let values = match input.into() {
            BatchInput::Batch(batch) => {
                let default_currency = batch
                    .default_currency
                    .or_else(|| options.default_currency.clone());
                debug!(records = batch.records.len(), "input already resolved, passing through");
                return Ok(Conversion::Converted(MoneyBatch::new(
                    batch.records,
                    default_currency,
                )));
            }
            BatchInput::Values(values) => values,
        };

        let coerce = options.errors == ErrorPolicy::Coerce;
        let default = options.default_currency.as_deref();
        let mut records = Vec::with_capacity(values.len());
        let mut abandoned = false;
        let mut coerced = 0usize;
        for value in &values {
            match self.resolve(value, default, coerce) {
                Ok(record) => {
                    if record.is_missing() {
                        coerced += 1;
                    }
                    records.push(record);
                }
                Err(error) => match options.errors {
                    // With coerce the resolver never errors; raise propagates
                    // the first failure unchanged.
                    ErrorPolicy::Raise | ErrorPolicy::Coerce => return Err(error),
                    ErrorPolicy::Ignore => {
                        debug!(value = %value, %error, "abandoning structured conversion for batch");
                        abandoned = true;
                        break;
                    }
                },
            }
        }
        if abandoned {
            return Ok(Conversion::Ignored {
                values,
                default_currency: options.default_currency.clone(),
            });
        }

        debug!(
            total = records.len(),
            coerced, "converted batch to money records"
        );
        Ok(Conversion::Converted(MoneyBatch::new(
            records,
            options.default_currency.clone(),
        )))
    }
}
