//! Error types for date-offset operations.
//!
//! A missing or zero amount is not an error: it is the empty state and is
//! reported as `Ok(None)` by [`crate::calculate`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid month overflow policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, OffsetError>;
