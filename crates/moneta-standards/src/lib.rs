#![deny(unsafe_code)]

//! Embedded ISO 4217 reference currency metadata and the symbol lookup
//! table derived from it.

pub mod entries;
pub mod error;
pub mod symbols;

pub use crate::entries::{CurrencyEntry, load_currency_entries};
pub use crate::error::StandardsError;
pub use crate::symbols::{EXCLUDED_GLYPHS, SymbolTable};
