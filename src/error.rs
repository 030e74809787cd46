//! Error types for phrase-to-date conversion.

use chrono::Weekday;
use thiserror::Error;

/// Every way a conversion can fail. All variants are recoverable: the caller
/// gets a typed result and may retry with corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input does not match the phrase grammar (or is empty).
    #[error("malformed input: {0:?}")]
    MalformedInput(String),

    /// The weekday token has no vocabulary entry.
    #[error("unknown weekday name: {0:?}")]
    UnknownWeekday(String),

    /// The month token has no vocabulary entry.
    #[error("unknown month name: {0:?}")]
    UnknownMonth(String),

    /// The week ordinal is outside 1..=5.
    #[error("week ordinal {0} is out of range (expected 1-5)")]
    OrdinalOutOfRange(u32),

    /// The requested occurrence lands past the end of the month, e.g. a 5th
    /// Monday in a month that only has four.
    #[error("occurrence {ordinal} of {weekday} does not exist in month {month}")]
    OccurrenceOutOfRange { ordinal: u32, weekday: Weekday, month: u32 },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
