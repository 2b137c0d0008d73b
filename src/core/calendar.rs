//! Day-level calendar arithmetic shared by the punchcard engine and tooltips.
//!
//! Timestamps throughout the crate are milliseconds since the Unix epoch,
//! day-normalized to midnight UTC by the statistics builder.

use time::{Date, Month, OffsetDateTime};

pub const ONE_DAY_MS: i64 = 86_400_000;

/// Calendar date of a day-normalized timestamp, when representable.
pub fn date_of_ms(timestamp_ms: i64) -> Option<Date> {
    OffsetDateTime::from_unix_timestamp(timestamp_ms.div_euclid(1000))
        .ok()
        .map(|moment| moment.date())
}

pub fn year_of_ms(timestamp_ms: i64) -> Option<i32> {
    date_of_ms(timestamp_ms).map(Date::year)
}

/// Weekday as a grid row: 0 = Sunday … 6 = Saturday.
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

/// Midnight of `date` in ms, the same normalization the builder applies.
pub fn midnight_ms(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp() * 1000
}

pub fn jan_first(year: i32) -> Option<Date> {
    Date::from_calendar_date(year, Month::January, 1).ok()
}

/// Midnight of the Sunday on or before January 1 of `year`, in ms.
/// Week-index origin for the punchcard grid.
pub fn aligned_start_ms(year: i32) -> Option<i64> {
    let jan1 = jan_first(year)?;
    Some(midnight_ms(jan1) - i64::from(weekday_index(jan1)) * ONE_DAY_MS)
}
