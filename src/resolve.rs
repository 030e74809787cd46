//! Field resolution: raw phrase tokens to canonical calendar values.

use crate::error::{ConvertError, Result};
use crate::vocab;
use crate::{DateQuery, ResolvedQuery};

/// A weekday occurs at most five times in any Gregorian month.
const MAX_ORDINAL: u32 = 5;

/// Reject ordinals outside 1..=5 before any table lookup or date arithmetic
/// happens.
pub(crate) fn validate_ordinal(ordinal: u32) -> Result<()> {
    if (1..=MAX_ORDINAL).contains(&ordinal) {
        Ok(())
    } else {
        Err(ConvertError::OrdinalOutOfRange(ordinal))
    }
}

/// Translate the query's tokens through the vocabulary tables.
///
/// Purely a lookup step: an unrecognized token is an error, never a guess.
pub(crate) fn resolve_fields(query: DateQuery) -> Result<ResolvedQuery> {
    let weekday = vocab::lookup_weekday(&query.weekday_token)
        .ok_or_else(|| ConvertError::UnknownWeekday(query.weekday_token.clone()))?;
    let month = vocab::lookup_month(&query.month_token)
        .ok_or_else(|| ConvertError::UnknownMonth(query.month_token.clone()))?;

    Ok(ResolvedQuery { ordinal: query.ordinal, weekday, month })
}
