//! Most-scrobbled artist per month.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::format;
use crate::core::model::TempStats;
use crate::render::{ChartSurface, ColumnPoint, SeriesData};

pub struct ArtistTimelineChart {
    base: ChartBase,
}

impl ArtistTimelineChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "Most scrobbled artist"),
        }
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let columns = stats
        .monthly
        .iter()
        .filter_map(|(&(year, month), counts)| {
            // Ties resolve to the alphabetically first artist.
            let (name, &count) = counts
                .iter()
                .max_by(|(a_name, a_count), (b_name, b_count)| {
                    a_count.cmp(b_count).then_with(|| b_name.cmp(a_name))
                })?;
            Some(ColumnPoint {
                category: format::format_month(year, month),
                label: name.clone(),
                value: count,
            })
        })
        .collect();
    SeriesData::LabelledColumns(columns)
}

impl ChartAdapter for ArtistTimelineChart {
    fn id(&self) -> &'static str {
        "artist-timeline"
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
