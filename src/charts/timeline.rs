//! Cumulative scrobbles over the whole listening history.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::model::TempStats;
use crate::render::{ChartSurface, SeriesData, TimePoint};

pub struct TimelineChart {
    base: ChartBase,
}

impl TimelineChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::personalized(tr, "Scrobbles"),
        }
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let mut total = 0u64;
    let points = stats
        .specific_days
        .iter()
        .map(|(&timestamp_ms, &count)| {
            total += u64::from(count);
            TimePoint {
                timestamp_ms,
                value: total as f64,
            }
        })
        .collect();
    SeriesData::Line(points)
}

impl ChartAdapter for TimelineChart {
    fn id(&self) -> &'static str {
        "timeline"
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn running_total_accumulates_in_day_order() {
        let stats = TempStats {
            specific_days: BTreeMap::from([(1_000, 3), (2_000, 4), (3_000, 1)]),
            ..TempStats::default()
        };
        match derive(&stats) {
            SeriesData::Line(points) => {
                let totals: Vec<f64> = points.iter().map(|p| p.value).collect();
                assert_eq!(totals, vec![3.0, 7.0, 8.0]);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }
}
