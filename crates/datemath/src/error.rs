//! Error types for datemath operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateMathError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The calendar could not build a local date-time from the given fields.
    #[error("Invalid composition: {0}")]
    InvalidComposition(String),

    /// The arithmetic result falls outside the representable range.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, DateMathError>;
