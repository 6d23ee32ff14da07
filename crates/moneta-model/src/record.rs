//! Canonical money records and the batch container handed to columnar storage.

use serde::{Deserialize, Serialize};

/// A resolved monetary value: an amount and a short ISO 4217 currency code.
///
/// Records are created by the resolver and consumed immediately by the batch
/// converter; they are never mutated after creation. Two sentinel shapes
/// exist alongside ordinary records:
///
/// - [`MoneyRecord::null`] — the resolution of null-like inputs (`None`,
///   empty strings, NaN): amount 0, empty currency.
/// - [`MoneyRecord::missing`] — the coercion sentinel substituted for
///   unresolvable elements under the `coerce` error policy: NaN amount,
///   empty currency. Distinguishable from a genuine zero record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyRecord {
    pub amount: f64,
    pub currency: String,
}

impl MoneyRecord {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// The resolution of a null-like input: zero amount, empty currency.
    pub fn null() -> Self {
        Self::new(0.0, "")
    }

    /// The coercion sentinel for unresolvable elements.
    pub fn missing() -> Self {
        Self::new(f64::NAN, "")
    }

    /// True for the coercion sentinel (NaN amount).
    pub fn is_missing(&self) -> bool {
        self.amount.is_nan()
    }

    /// True for the null-like resolution (zero amount, empty currency).
    pub fn is_null(&self) -> bool {
        self.amount == 0.0 && self.currency.is_empty()
    }
}

/// NaN-aware equality so the missing sentinel compares equal to itself.
impl PartialEq for MoneyRecord {
    fn eq(&self, other: &Self) -> bool {
        let amounts_equal =
            self.amount == other.amount || (self.amount.is_nan() && other.amount.is_nan());
        amounts_equal && self.currency == other.currency
    }
}

impl std::fmt::Display for MoneyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.currency.is_empty() {
            write!(f, "{}", format_amount(self.amount))
        } else {
            write!(f, "{} {}", format_amount(self.amount), self.currency)
        }
    }
}

/// Formats an amount as a string without unnecessary trailing zeros.
pub fn format_amount(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// An ordered sequence of resolved records plus the resolved default currency
/// code, positionally aligned with the converter's input.
///
/// This is the shape an external columnar container consumes. A batch can
/// also be fed back into the converter, which passes it through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneyBatch {
    pub records: Vec<MoneyRecord>,
    pub default_currency: Option<String>,
}

impl MoneyBatch {
    pub fn new(records: Vec<MoneyRecord>, default_currency: Option<String>) -> Self {
        Self {
            records,
            default_currency,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{MoneyRecord, format_amount};

    #[test]
    fn sentinels_are_distinguishable() {
        let null = MoneyRecord::null();
        let missing = MoneyRecord::missing();
        assert!(null.is_null());
        assert!(!null.is_missing());
        assert!(missing.is_missing());
        assert!(!missing.is_null());
        assert_ne!(null, missing);
    }

    #[test]
    fn missing_compares_equal_to_itself() {
        assert_eq!(MoneyRecord::missing(), MoneyRecord::missing());
    }

    #[test]
    fn display_strips_trailing_zeros() {
        assert_eq!(MoneyRecord::new(128.0, "GBP").to_string(), "128 GBP");
        assert_eq!(MoneyRecord::new(-123.5, "GBP").to_string(), "-123.5 GBP");
        assert_eq!(format_amount(10.50), "10.5");
    }
}
