//! Error types for slot-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Schedule store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
