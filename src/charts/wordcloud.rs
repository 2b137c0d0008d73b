//! Artist wordcloud weighted by scrobble counts.

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, NoTranslate};
use crate::core::model::TempStats;
use crate::render::{ChartSurface, SeriesData, WordWeight};

const MAX_WORDS: usize = 50;

pub struct WordcloudChart {
    base: ChartBase,
}

impl WordcloudChart {
    pub fn new() -> Self {
        Self {
            base: ChartBase::new(Rc::new(NoTranslate), "Artists"),
        }
    }
}

impl Default for WordcloudChart {
    fn default() -> Self {
        Self::new()
    }
}

fn derive(stats: &TempStats) -> SeriesData {
    let mut weights: Vec<WordWeight> = stats
        .seen_artists
        .iter()
        .map(|(name, artist)| WordWeight {
            word: name.clone(),
            weight: artist.scrobbles,
        })
        .collect();
    weights.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.word.cmp(&b.word)));
    weights.truncate(MAX_WORDS);
    SeriesData::Weights(weights)
}

impl ChartAdapter for WordcloudChart {
    fn id(&self) -> &'static str {
        "wordcloud"
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
