//! Average scrobbles per listening day, rolled up by month.

use std::collections::BTreeMap;
use std::rc::Rc;

use time::Month;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::calendar;
use crate::core::model::TempStats;
use crate::render::{ChartSurface, SeriesData, TimePoint};

pub struct ScrobblePerDayChart {
    base: ChartBase,
}

impl ScrobblePerDayChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::personalized(tr, "Average scrobbles per day"),
        }
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let mut by_month: BTreeMap<(i32, u8), (u64, u32)> = BTreeMap::new();
    for (&timestamp_ms, &count) in &stats.specific_days {
        let Some(date) = calendar::date_of_ms(timestamp_ms) else {
            continue;
        };
        let slot = by_month
            .entry((date.year(), u8::from(date.month())))
            .or_default();
        slot.0 += u64::from(count);
        slot.1 += 1;
    }

    let points = by_month
        .into_iter()
        .filter_map(|((year, month), (sum, days))| {
            let first = time::Date::from_calendar_date(year, Month::try_from(month).ok()?, 1).ok()?;
            Some(TimePoint {
                timestamp_ms: calendar::midnight_ms(first),
                value: sum as f64 / f64::from(days),
            })
        })
        .collect();
    SeriesData::Line(points)
}

impl ChartAdapter for ScrobblePerDayChart {
    fn id(&self) -> &'static str {
        "scrobble-per-day"
    }

    fn mount(&mut self, surface: Box<dyn ChartSurface>) -> Result<(), ChartError> {
        self.base.mount(surface)
    }

    fn update(&mut self, stats: &TempStats) -> Result<(), ChartError> {
        if stats.last.is_none() {
            return Ok(());
        }
        let series = derive(stats);
        if let Some(surface) = self.base.surface() {
            surface.replace_series(series)?;
        }
        Ok(())
    }

    fn set_username(&mut self, username: &str) -> Result<(), ChartError> {
        self.base.set_username(username)
    }

    fn unmount(&mut self) {
        self.base.release();
    }
}
