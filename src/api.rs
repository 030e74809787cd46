use chrono::{Datelike, Local, NaiveDate};

use crate::error::Result;
use crate::{calendar, parser, resolve};

/// Conversion context.
///
/// Holds the environment needed to anchor a phrase in time: the reference
/// date fixes the target year and, in [`Mode::Lenient`], supplies defaults
/// for missing weekday/month fields.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Reference date used for the target year and Lenient-mode defaults.
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { reference_date: NaiveDate::from_ymd_opt(2024, 11, 14).unwrap() }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// Required-fields policy for the phrase grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// All fields mandatory: `<digits>-<suffix> <weekday> <month>`.
    #[default]
    Strict,
    /// Every field optional; missing fields default from the reference date
    /// (ordinal defaults to 1).
    Lenient,
}

/// Convert `text` in Strict mode with a default [`Context`].
///
/// # Example
/// ```
/// use chrono::{Datelike, Weekday};
/// use nthweekday::convert_to_date;
///
/// let date = convert_to_date("3-я среда мая").unwrap();
/// assert_eq!(date.month(), 5);
/// assert_eq!(date.weekday(), Weekday::Wed);
/// ```
pub fn convert_to_date(text: &str) -> Result<NaiveDate> {
    convert_to_date_with(text, Mode::Strict, &Context::default())
}

/// Convert `text` with the given `mode` and `context`.
///
/// Chains parse → ordinal validation → vocabulary lookup → date arithmetic,
/// short-circuiting on the first failure. Each call surfaces exactly one
/// [`ConvertError`](crate::ConvertError) kind; failures are never retried or
/// defaulted into a guessed date.
pub fn convert_to_date_with(text: &str, mode: Mode, context: &Context) -> Result<NaiveDate> {
    let query = parser::parse(text, mode, context.reference_date)?;
    resolve::validate_ordinal(query.ordinal)?;
    let resolved = resolve::resolve_fields(query)?;
    calendar::nth_weekday_of_month(
        context.reference_date.year(),
        resolved.month,
        resolved.weekday,
        resolved.ordinal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;
    use chrono::Weekday;

    fn reference_context() -> Context {
        Context { reference_date: NaiveDate::from_ymd_opt(2024, 11, 14).unwrap() }
    }

    #[test]
    fn strict_second_thursday_of_november() {
        let date = convert_to_date_with("2-й четверг ноября", Mode::Strict, &reference_context());
        assert_eq!(date.unwrap().to_string(), "2024-11-14");
    }

    #[test]
    fn strict_third_wednesday_of_may() {
        let date = convert_to_date_with("3-я среда мая", Mode::Strict, &reference_context());
        assert_eq!(date.unwrap().to_string(), "2024-05-15");
    }

    #[test]
    fn ordinal_out_of_range_fails_before_arithmetic() {
        let err =
            convert_to_date_with("6-й понедельник января", Mode::Strict, &reference_context());
        assert_eq!(err.unwrap_err(), ConvertError::OrdinalOutOfRange(6));
    }

    #[test]
    fn fifth_occurrence_overflow_is_rejected() {
        // November 2024 has only four Mondays (4, 11, 18, 25).
        let err =
            convert_to_date_with("5-й понедельник ноября", Mode::Strict, &reference_context());
        assert_eq!(
            err.unwrap_err(),
            ConvertError::OccurrenceOutOfRange { ordinal: 5, weekday: Weekday::Mon, month: 11 }
        );
    }

    #[test]
    fn misspelled_weekday_is_not_guessed() {
        let err = convert_to_date_with("2-й четвёрг ноября", Mode::Strict, &reference_context());
        assert_eq!(err.unwrap_err(), ConvertError::UnknownWeekday("четвёрг".to_string()));
    }

    #[test]
    fn malformed_input_fails_in_both_modes() {
        for mode in [Mode::Strict, Mode::Lenient] {
            let err = convert_to_date_with("$$$", mode, &reference_context()).unwrap_err();
            assert!(matches!(err, ConvertError::MalformedInput(_)), "{mode:?}: {err:?}");
        }
    }

    #[test]
    fn lenient_defaults_stay_in_the_reference_month() {
        // Reference is Thursday 2024-11-14; "2-я" means "second Thursday of
        // November", which is the reference date itself.
        let date = convert_to_date_with("2-я", Mode::Lenient, &reference_context()).unwrap();
        assert_eq!(date.to_string(), "2024-11-14");
        assert_eq!(date.weekday(), Weekday::Thu);
        assert_eq!(date.month(), 11);
    }

    #[test]
    fn lenient_bare_tokens_resolve_first_occurrence() {
        let date =
            convert_to_date_with("среда ноября", Mode::Lenient, &reference_context()).unwrap();
        assert_eq!(date.to_string(), "2024-11-06");
    }

    #[test]
    fn year_comes_from_the_reference_date() {
        let context = Context { reference_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() };
        let date = convert_to_date_with("2-й четверг ноября", Mode::Strict, &context).unwrap();
        assert_eq!(date.to_string(), "2025-11-13");
    }
}
