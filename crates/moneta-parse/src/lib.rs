//! Resolution of heterogeneous money representations into canonical
//! (amount, currency) records.
//!
//! The pipeline runs one way: the symbol table (from `moneta-standards`)
//! feeds the compiled [`patterns::PatternSet`], the [`resolve::MoneyParser`]
//! resolves single values against it, and batch conversion maps the resolver
//! over a sequence under a caller-chosen error policy. [`frame`] hands the
//! result to columnar storage.

pub mod convert;
pub mod frame;
pub mod patterns;
pub mod resolve;

pub use convert::{BatchInput, Conversion};
pub use frame::{batch_to_frame, column_to_values};
pub use patterns::{CurrencyToken, Extractor, PatternError, PatternRule, PatternSet};
pub use resolve::MoneyParser;
