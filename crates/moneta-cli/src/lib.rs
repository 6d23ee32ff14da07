//! CLI library components for the moneta tool.

pub mod logging;
