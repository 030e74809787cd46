//! Resolve localized "Nth <weekday> of <month>" phrases into calendar dates.
//!
//! The pipeline is a straight chain: the phrase parser extracts raw fields,
//! the ordinal is range-checked, the vocabulary tables translate tokens into
//! calendar values, and the date resolver computes the Nth occurrence of the
//! weekday within the month — rejecting occurrences that spill past the end
//! of the month instead of silently returning a date in the next one.
//!
//! ```
//! use chrono::NaiveDate;
//! use nthweekday::{Context, Mode, convert_to_date_with};
//!
//! let ctx = Context { reference_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() };
//! let date = convert_to_date_with("2-й четверг ноября", Mode::Strict, &ctx).unwrap();
//! assert_eq!(date.to_string(), "2024-11-14");
//! ```

use chrono::Weekday;

#[macro_use]
mod macros;
mod api;
mod calendar;
mod error;
mod parser;
mod resolve;
mod vocab;

pub use api::{Context, Mode, convert_to_date, convert_to_date_with};
pub use calendar::nth_weekday_of_month;
pub use error::{ConvertError, Result};

// --- Internal pipeline types ------------------------------------------------

/// Raw fields extracted from one phrase. Created by the parser, consumed by
/// the field resolver; never outlives a single conversion call.
#[derive(Debug, Clone)]
pub(crate) struct DateQuery {
    /// 1-based occurrence number ("2nd Thursday" => 2).
    pub ordinal: u32,
    /// Lowercased weekday token as it appeared in (or was defaulted into) the phrase.
    pub weekday_token: String,
    /// Lowercased month token, genitive case.
    pub month_token: String,
}

/// A [`DateQuery`] with both tokens translated through the vocabulary tables.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedQuery {
    pub ordinal: u32,
    pub weekday: Weekday,
    /// Month number 1..=12.
    pub month: u32,
}
