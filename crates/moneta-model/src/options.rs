//! Configuration options for batch conversion.

use serde::{Deserialize, Serialize};

/// What the batch converter does when a single element fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Abort the whole batch on the first failure (default).
    #[default]
    Raise,
    /// Replace unresolvable elements with the missing sentinel.
    Coerce,
    /// Abandon conversion entirely and return the untouched input.
    Ignore,
}

impl ErrorPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::Coerce => "coerce",
            Self::Ignore => "ignore",
        }
    }
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(Self::Raise),
            "coerce" => Ok(Self::Coerce),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!(
                "unknown error policy {other:?} (expected raise, coerce or ignore)"
            )),
        }
    }
}

/// Options controlling a single conversion call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// ISO code applied to bare numeric values with no explicit currency.
    pub default_currency: Option<String>,

    /// Per-element failure handling.
    pub errors: ErrorPolicy,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = Some(code.into());
        self
    }

    pub fn with_errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }
}
