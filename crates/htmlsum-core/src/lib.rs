//! htmlsum core — error types, summarizer configuration, field vocabulary.

pub mod config;
pub mod error;
pub mod field;

pub use config::{validate_placeholder, SummarizerOptions, SummaryDefaults, DEFAULT_PLACEHOLDER};
pub use error::{Error, Result};
pub use field::Field;
