//! Month-by-month racing bars of running artist totals.

use std::collections::HashMap;
use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::format;
use crate::core::model::TempStats;
use crate::render::{ChartSurface, RaceFrame, RankedEntry, SeriesData};

/// Bars shown per frame.
const FRAME_SIZE: usize = 10;

pub struct RaceChart {
    base: ChartBase,
}

impl RaceChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::personalized(tr, "Artist race"),
        }
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let mut running: HashMap<String, u32> = HashMap::new();
    let frames = stats
        .monthly
        .iter()
        .map(|(&(year, month), counts)| {
            for (name, &count) in counts {
                *running.entry(name.clone()).or_default() += count;
            }
            let mut entries: Vec<RankedEntry> = running
                .iter()
                .map(|(name, &total)| RankedEntry {
                    name: name.clone(),
                    total,
                })
                .collect();
            entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
            entries.truncate(FRAME_SIZE);
            RaceFrame {
                label: format::format_month(year, month),
                entries,
            }
        })
        .collect();
    SeriesData::Frames(frames)
}

impl ChartAdapter for RaceChart {
    fn id(&self) -> &'static str {
        "race"
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
