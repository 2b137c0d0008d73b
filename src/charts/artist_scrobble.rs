//! Artists plotted by distinct tracks against total scrobbles.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate};
use crate::core::model::TempStats;
use crate::render::{ChartSurface, LabelledPoint, SeriesData};

/// Artists below this scrobble count only clutter the scatter.
const MIN_SCROBBLES: u32 = 50;

pub struct ArtistScrobbleChart {
    base: ChartBase,
}

impl ArtistScrobbleChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "Tracks per artist"),
        }
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let mut points: Vec<LabelledPoint> = stats
        .seen_artists
        .iter()
        .filter(|(_, artist)| artist.scrobbles >= MIN_SCROBBLES)
        .map(|(name, artist)| LabelledPoint {
            label: name.clone(),
            x: f64::from(artist.tracks),
            y: f64::from(artist.scrobbles),
        })
        .collect();
    points.sort_by(|a, b| a.label.cmp(&b.label));
    SeriesData::Scatter(points)
}

impl ChartAdapter for ArtistScrobbleChart {
    fn id(&self) -> &'static str {
        "artist-scrobble"
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
