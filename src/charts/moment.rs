//! Scrobbles grouped by a fixed category set: hour of day, weekday or month.
//!
//! One adapter type, parameterized three ways, mirroring the three slots it
//! occupies on the charts page.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::model::{TempStats, MONTH_NAMES, WEEKDAY_NAMES};
use crate::render::{ChartSurface, SeriesData};

pub struct ScrobbleMomentChart {
    base: ChartBase,
    id: &'static str,
    categories: Vec<String>,
    select: fn(&TempStats) -> Vec<u32>,
}

impl ScrobbleMomentChart {
    pub fn hours(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "Scrobbles per hour"),
            id: "moment-hours",
            categories: (0..24).map(|hour| format!("{hour}h")).collect(),
            select: |stats| stats.hours.to_vec(),
        }
    }

    pub fn days(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "Scrobbles per weekday"),
            id: "moment-days",
            categories: WEEKDAY_NAMES.iter().map(|day| day.to_string()).collect(),
            select: |stats| stats.days.to_vec(),
        }
    }

    pub fn months(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "Scrobbles per month"),
            id: "moment-months",
            categories: MONTH_NAMES.iter().map(|month| month.to_string()).collect(),
            select: |stats| stats.months.to_vec(),
        }
    }
}

impl ChartAdapter for ScrobbleMomentChart {
    fn id(&self) -> &'static str {
        self.id
    }

    fn mount(&mut self, surface: Box<dyn ChartSurface>) -> Result<(), ChartError> {
        self.base.mount(surface)
    }

    fn update(&mut self, stats: &TempStats) -> Result<(), ChartError> {
        if stats.last.is_none() {
            return Ok(());
        }
        let series = SeriesData::Columns {
            categories: self.categories.clone(),
            values: (self.select)(stats),
        };
        if let Some(surface) = self.base.surface() {
            surface.replace_series(series)?;
        }
        Ok(())
    }

    fn unmount(&mut self) {
        self.base.release();
    }
}
