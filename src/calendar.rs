//! Nth-weekday-of-month date arithmetic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{ConvertError, Result};

/// Compute the date of the `ordinal`-th occurrence of `weekday` within
/// `month` of `year`.
///
/// Counting starts from the 1st of the month: the offset from the 1st to the
/// first occurrence of `weekday` is `(target - first_weekday + 7) % 7` days,
/// and each further occurrence is exactly one week later. When the candidate
/// date falls outside the requested month the occurrence does not exist and
/// [`ConvertError::OccurrenceOutOfRange`] is returned; a spilled-over date is
/// never silently returned.
///
/// The caller is expected to have validated `ordinal` (1..=5) already; an
/// over-range ordinal here still fails, via the spill-over check.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, ordinal: u32) -> Result<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(ConvertError::OccurrenceOutOfRange { ordinal, weekday, month })?;
    let first_weekday = first_of_month.weekday().num_days_from_monday();

    let days_to_add = (weekday.num_days_from_monday() + 7 - first_weekday) % 7;
    let first_occurrence = first_of_month + Duration::days(i64::from(days_to_add));

    let candidate = first_occurrence + Duration::weeks(i64::from(ordinal) - 1);
    if candidate.month() != month {
        return Err(ConvertError::OccurrenceOutOfRange { ordinal, weekday, month });
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_thursday_of_november_2024() {
        let date = nth_weekday_of_month(2024, 11, Weekday::Thu, 2).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 11, 14).unwrap());
    }

    #[test]
    fn first_occurrence_on_the_first_of_the_month() {
        // May 2024 starts on a Wednesday.
        let date = nth_weekday_of_month(2024, 5, Weekday::Wed, 1).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn fifth_occurrence_exists_in_long_months() {
        // January 2024 has five Wednesdays (3, 10, 17, 24, 31).
        let date = nth_weekday_of_month(2024, 1, Weekday::Wed, 5).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn fifth_monday_of_a_28_day_february_overflows() {
        // February 2022 starts on a Tuesday and has 28 days, so Mondays fall
        // on 7, 14, 21 and 28 only.
        let err = nth_weekday_of_month(2022, 2, Weekday::Mon, 5).unwrap_err();
        assert_eq!(
            err,
            ConvertError::OccurrenceOutOfRange { ordinal: 5, weekday: Weekday::Mon, month: 2 }
        );
    }

    #[test]
    fn every_existing_occurrence_matches_weekday_and_month() {
        for month in 1..=12u32 {
            for offset in 0..7u32 {
                let weekday = Weekday::Mon;
                let weekday = (0..offset).fold(weekday, |w, _| w.succ());
                for ordinal in 1..=4u32 {
                    let date = nth_weekday_of_month(2024, month, weekday, ordinal).unwrap();
                    assert_eq!(date.weekday(), weekday);
                    assert_eq!(date.month(), month);
                }
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = nth_weekday_of_month(2024, 11, Weekday::Thu, 2);
        let b = nth_weekday_of_month(2024, 11, Weekday::Thu, 2);
        assert_eq!(a, b);
    }
}
