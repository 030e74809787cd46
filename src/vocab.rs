//! Vocabulary tables mapping Russian weekday and month tokens to calendar values.
//!
//! Both tables are process-wide constants built lazily on first use and never
//! mutated afterwards, so unsynchronized concurrent reads are fine. Lookups
//! are case-insensitive (callers lowercase the token first) and exact: a token
//! missing from its table is an error, never a fuzzy match.

use chrono::Weekday;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Weekday names in ISO order (Monday first), as they appear in input phrases.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

/// Month names in the genitive case ("of January" …), indices 0..=11 for
/// months 1..=12.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

static WEEKDAYS: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| {
    WEEKDAY_NAMES.iter().enumerate().map(|(i, &name)| (name, weekday_from_monday_offset(i))).collect()
});

static MONTHS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| MONTH_NAMES.iter().enumerate().map(|(i, &name)| (name, i as u32 + 1)).collect());

fn weekday_from_monday_offset(offset: usize) -> Weekday {
    let mut weekday = Weekday::Mon;
    for _ in 0..offset {
        weekday = weekday.succ();
    }
    weekday
}

/// Look up a lowercased weekday token. `None` when the token is not in the table.
pub(crate) fn lookup_weekday(token: &str) -> Option<Weekday> {
    WEEKDAYS.get(token).copied()
}

/// Look up a lowercased (genitive) month token, yielding a month number 1..=12.
pub(crate) fn lookup_month(token: &str) -> Option<u32> {
    MONTHS.get(token).copied()
}

/// The input-vocabulary name for a weekday, used for Lenient-mode defaulting.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// The input-vocabulary name for a month number 1..=12.
pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}
