use thiserror::Error;

/// Failures raised while resolving a single raw value into a money record.
///
/// Both variants carry the offending raw value so that batch callers can
/// surface which element broke the conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("currency code is unavailable - cannot convert {value}; set a default?")]
    CurrencyUndetermined { value: String },

    #[error("could not parse {value} as money")]
    UnparseableValue { value: String },
}

impl MoneyError {
    /// The raw value that failed to resolve.
    pub fn value(&self) -> &str {
        match self {
            Self::CurrencyUndetermined { value } | Self::UnparseableValue { value } => value,
        }
    }
}

pub type Result<T> = std::result::Result<T, MoneyError>;
