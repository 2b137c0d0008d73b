//! One labelled point per recorded listening day.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::{calendar, format};
use crate::core::model::TempStats;
use crate::render::{ChartSurface, LabelledPoint, SeriesData};

pub struct ScrobbleScatterChart {
    base: ChartBase,
}

impl ScrobbleScatterChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "All days"),
        }
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let points = stats
        .specific_days
        .iter()
        .filter_map(|(&timestamp_ms, &count)| {
            let date = calendar::date_of_ms(timestamp_ms)?;
            Some(LabelledPoint {
                label: format::format_date(date),
                x: timestamp_ms as f64,
                y: f64::from(count),
            })
        })
        .collect();
    SeriesData::Scatter(points)
}

impl ChartAdapter for ScrobbleScatterChart {
    fn id(&self) -> &'static str {
        "scrobble-scatter"
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

    fn unmount(&mut self) {
        self.base.release();
    }
}
