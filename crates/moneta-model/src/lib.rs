//! Core data model for monetary value normalization.
//!
//! The types here describe the pipeline's inputs and outputs: the closed set
//! of raw shapes a caller may hand in ([`MoneyValue`]), the canonical
//! resolved unit ([`MoneyRecord`]), the ordered batch consumed by columnar
//! storage ([`MoneyBatch`]), and the configuration and error surface shared
//! by the resolver and the batch converter.

pub mod error;
pub mod options;
pub mod record;
pub mod value;

pub use error::{MoneyError, Result};
pub use options::{ConvertOptions, ErrorPolicy};
pub use record::{MoneyBatch, MoneyRecord, format_amount};
pub use value::{MoneyValue, Scalar};
