//! Calendar bucketing and year navigation behind the punchcard heatmap.
//!
//! Day counts land in a sparse (week-of-year, weekday) grid anchored on the
//! Sunday on or before January 1 of the displayed year. Navigation re-buckets
//! from the cached day counts, so it works without a fresh snapshot.

use std::collections::BTreeMap;

use time::Date;

use crate::core::calendar::{self, ONE_DAY_MS};
use crate::render::HeatCell;

/// Year-navigation state machine. Owned exclusively by the punchcard
/// adapter; the rendering layer talks to it through adapter methods.
#[derive(Debug, Clone, Default)]
pub struct YearNavigator {
    year: i32,
    first_year: Option<i32>,
    last_year: Option<i32>,
    by_user: bool,
    cached_days: BTreeMap<i64, u32>,
}

impl YearNavigator {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn by_user(&self) -> bool {
        self.by_user
    }

    /// Whether the "previous year" control should be shown. Pure affordance:
    /// stepping past the bound is still allowed.
    pub fn previous_visible(&self) -> bool {
        self.first_year.map_or(true, |first| self.year > first)
    }

    /// Whether the "next year" control should be shown.
    pub fn next_visible(&self) -> bool {
        self.last_year.map_or(true, |last| self.year < last)
    }

    /// Absorb a fresh snapshot: derive the year bounds, auto-track the
    /// newest year until the user has navigated, cache the day counts and
    /// return the rebucketed grid for the displayed year.
    pub fn absorb(
        &mut self,
        first_ms: Option<i64>,
        last_ms: i64,
        days: &BTreeMap<i64, u32>,
    ) -> Vec<HeatCell> {
        self.first_year = first_ms.and_then(calendar::year_of_ms);
        self.last_year = calendar::year_of_ms(last_ms);
        if !self.by_user {
            if let Some(last) = self.last_year {
                if last != self.year {
                    self.year = last;
                }
            }
        }
        self.cached_days = days.clone();
        bucket_year(&self.cached_days, self.year)
    }

    pub fn step_previous(&mut self) -> Vec<HeatCell> {
        self.step(-1)
    }

    pub fn step_next(&mut self) -> Vec<HeatCell> {
        self.step(1)
    }

    fn step(&mut self, delta: i32) -> Vec<HeatCell> {
        self.by_user = true;
        self.year += delta;
        bucket_year(&self.cached_days, self.year)
    }
}

/// Sparse (week, weekday, count) grid for one calendar year. Entries from
/// other years are filtered out; output order carries no meaning.
pub fn bucket_year(days: &BTreeMap<i64, u32>, year: i32) -> Vec<HeatCell> {
    let Some(start) = calendar::aligned_start_ms(year) else {
        return Vec::new();
    };
    days.iter()
        .filter_map(|(&key, &count)| {
            let date = calendar::date_of_ms(key)?;
            if date.year() != year {
                return None;
            }
            let since_start = ((key - start) as f64 / ONE_DAY_MS as f64).round() as i64;
            Some(HeatCell {
                week: since_start.div_euclid(7) as u32,
                weekday: calendar::weekday_index(date),
                count,
            })
        })
        .collect()
}

/// Calendar date of a hovered cell. Exact inverse of [`bucket_year`]'s
/// coordinates: both anchor on the Sunday on or before January 1.
pub fn cell_date(year: i32, week: u32, weekday: u8) -> Option<Date> {
    let start = calendar::aligned_start_ms(year)?;
    let offset = i64::from(week) * 7 + i64::from(weekday);
    calendar::date_of_ms(start + offset * ONE_DAY_MS)
}
