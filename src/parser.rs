//! Phrase parser for the "Nth <weekday> of <month>" grammar.
//!
//! One grammar, two required-fields policies: [`Mode::Strict`] demands the
//! full `<digits>-<suffix> <weekday> <month>` shape, [`Mode::Lenient`] makes
//! every field optional and fills the gaps from the reference date. Both
//! grammars are anchored at both ends, so text trailing the month token is a
//! parse error rather than being ignored.

use chrono::{Datelike, NaiveDate};

use crate::error::{ConvertError, Result};
use crate::vocab;
use crate::{DateQuery, Mode};

/// Extract a [`DateQuery`] from `text`.
///
/// Pure function of its arguments; `reference` is consulted only in Lenient
/// mode, for defaulting. Tokens come out lowercased, ready for table lookup.
pub(crate) fn parse(text: &str, mode: Mode, reference: NaiveDate) -> Result<DateQuery> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConvertError::MalformedInput(text.to_string()));
    }

    match mode {
        Mode::Strict => parse_strict(text),
        Mode::Lenient => parse_lenient(text, reference),
    }
}

fn parse_strict(text: &str) -> Result<DateQuery> {
    // The ordinal suffix ("й"/"я") only confirms the shape; its value is unused.
    let caps = regex!(r"(?i)^(\d+)-(?:й|я)\s+(\w+)\s+(\w+)$")
        .captures(text)
        .ok_or_else(|| ConvertError::MalformedInput(text.to_string()))?;

    Ok(DateQuery {
        ordinal: parse_ordinal(&caps[1], text)?,
        weekday_token: caps[2].to_lowercase(),
        month_token: caps[3].to_lowercase(),
    })
}

fn parse_lenient(text: &str, reference: NaiveDate) -> Result<DateQuery> {
    let caps = regex!(r"(?i)^(?:(\d+)(?:-(?:й|я))?)?\s*(\w+)?\s*(\w+)?$")
        .captures(text)
        .ok_or_else(|| ConvertError::MalformedInput(text.to_string()))?;

    let ordinal = match caps.get(1) {
        Some(m) => parse_ordinal(m.as_str(), text)?,
        None => 1,
    };
    let weekday_token = match caps.get(2) {
        Some(m) => m.as_str().to_lowercase(),
        None => vocab::weekday_name(reference.weekday()).to_string(),
    };
    let month_token = match caps.get(3) {
        Some(m) => m.as_str().to_lowercase(),
        None => vocab::month_name(reference.month()).to_string(),
    };

    Ok(DateQuery { ordinal, weekday_token, month_token })
}

fn parse_ordinal(digits: &str, text: &str) -> Result<u32> {
    // Overflowing u32 takes absurd input; treat it like any other bad ordinal shape.
    digits.parse().map_err(|_| ConvertError::MalformedInput(text.to_string()))
}
