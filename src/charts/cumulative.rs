//! Cumulative monthly scrobbles for the heaviest-played artists.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::format;
use crate::core::model::TempStats;
use crate::render::{ChartSurface, NamedSeries, SeriesData};

const TOP_ARTISTS: usize = 10;

pub struct CumulativeItemsChart {
    base: ChartBase,
}

impl CumulativeItemsChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::personalized(tr, "Cumulative scrobbles"),
        }
    }
}

fn top_artists(stats: &TempStats) -> Vec<String> {
    let mut names: Vec<(&String, u32)> = stats
        .seen_artists
        .iter()
        .map(|(name, artist)| (name, artist.scrobbles))
        .collect();
    names.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    names
        .into_iter()
        .take(TOP_ARTISTS)
        .map(|(name, _)| name.clone())
        .collect()
}

fn derive(stats: &TempStats) -> SeriesData {
    let categories: Vec<String> = stats
        .monthly
        .keys()
        .map(|&(year, month)| format::format_month(year, month))
        .collect();

    let series = top_artists(stats)
        .into_iter()
        .map(|name| {
            let mut running = 0u32;
            let values = stats
                .monthly
                .values()
                .map(|counts| {
                    running += counts.get(&name).copied().unwrap_or(0);
                    running
                })
                .collect();
            NamedSeries { name, values }
        })
        .collect();

    SeriesData::MultiLine { categories, series }
}

impl ChartAdapter for CumulativeItemsChart {
    fn id(&self) -> &'static str {
        "cumulative-items"
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
