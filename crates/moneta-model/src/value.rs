//! The closed set of raw input shapes accepted by the resolver.

use serde::{Deserialize, Serialize};

use crate::record::{MoneyRecord, format_amount};

/// A loosely typed element of a two-element (amount, code) pair.
///
/// Pair elements are converted opportunistically: a failed conversion makes
/// the whole pair fall through to the numeric fallback instead of raising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Attempts to read this element as a numeric amount.
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Attempts to read this element as a currency code token.
    pub fn as_code(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(format_amount(*v)),
            Self::Text(s) => Some(s.clone()),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, ""),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", format_amount(*v)),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One raw value of unknown provenance, as a closed sum over every accepted
/// input shape.
///
/// Modelling the shapes explicitly keeps the resolver's dispatch exhaustive:
/// adding a new accepted shape forces every match site to handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoneyValue {
    /// An already-resolved record, passed through unchanged.
    Record(MoneyRecord),
    /// An absent value.
    Null,
    /// A rich money object carrying an explicit amount and currency.
    Money { amount: f64, currency: String },
    /// Free text, to be matched against the pattern rules.
    Text(String),
    /// A bare integer; resolvable only with a default currency or coercion.
    Int(i64),
    /// A bare float. NaN is treated as a null sentinel.
    Float(f64),
    /// A two-element (amount-like, code-like) sequence.
    Pair(Scalar, Scalar),
}

impl MoneyValue {
    /// True for shapes the resolver maps straight to [`MoneyRecord::null`].
    pub fn is_null_like(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

impl std::fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(record) => write!(f, "{record}"),
            Self::Null => write!(f, ""),
            Self::Money { amount, currency } => {
                write!(f, "{} {currency}", format_amount(*amount))
            }
            Self::Text(s) => write!(f, "{s}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", format_amount(*v)),
            Self::Pair(amount, code) => write!(f, "({amount}, {code})"),
        }
    }
}

impl From<&str> for MoneyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MoneyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for MoneyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for MoneyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<MoneyRecord> for MoneyValue {
    fn from(record: MoneyRecord) -> Self {
        Self::Record(record)
    }
}

impl From<(f64, &str)> for MoneyValue {
    fn from((amount, currency): (f64, &str)) -> Self {
        Self::Money {
            amount,
            currency: currency.to_string(),
        }
    }
}
