//! Day-of-week × week-of-year heatmap with year paging.

pub mod engine;

use std::rc::Rc;

use crate::charts::{ChartAdapter, ChartBase, ChartError, Translate, YearNavigation};
use crate::core::format;
use crate::core::model::{TempStats, WEEKDAY_NAMES};
use crate::render::{ChartSurface, HeatCell, NavControl, SeriesData};

use engine::YearNavigator;

/// Declarative heatmap styling the host applies verbatim.
#[derive(Debug, Clone)]
pub struct HeatmapStyle {
    pub min_color: &'static str,
    pub max_color: &'static str,
    pub border_width: u8,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            min_color: "#FFFFFF",
            max_color: "#7CB5EC",
            border_width: 1,
        }
    }
}

pub struct PunchcardChart {
    base: ChartBase,
    nav: YearNavigator,
    pub style: HeatmapStyle,
}

impl PunchcardChart {
    pub fn new(tr: Rc<dyn Translate>) -> Self {
        Self {
            base: ChartBase::new(tr, "Number of scrobbles"),
            nav: YearNavigator::default(),
            style: HeatmapStyle::default(),
        }
    }

    /// Column captions: a year spans at most 54 Sunday-aligned weeks.
    pub fn week_categories() -> Vec<String> {
        (0..54).map(|week| format!("W{week}")).collect()
    }

    /// Row captions, Sunday first, matching the weekday grid index.
    pub fn weekday_categories() -> Vec<String> {
        WEEKDAY_NAMES.iter().map(|day| day.to_string()).collect()
    }

    pub fn displayed_year(&self) -> i32 {
        self.nav.year()
    }

    /// Label for a hovered cell; the host passes the cell's rendered count.
    pub fn tooltip(&self, week: u32, weekday: u8, count: u32) -> Option<String> {
        let date = engine::cell_date(self.nav.year(), week, weekday)?;
        Some(format!(
            "{}: {}",
            format::format_date(date),
            format::format_scrobbles(count)
        ))
    }

    fn push_grid(&mut self, grid: Vec<HeatCell>) -> Result<(), ChartError> {
        let year = self.nav.year();
        let previous_visible = self.nav.previous_visible();
        let next_visible = self.nav.next_visible();
        let Some(surface) = self.base.surface() else {
            return Ok(());
        };
        surface.replace_series(SeriesData::Heatmap(grid))?;
        surface.set_year_label(&year.to_string())?;
        surface.set_control(
            NavControl::Previous,
            &(year - 1).to_string(),
            previous_visible,
        )?;
        surface.set_control(NavControl::Next, &(year + 1).to_string(), next_visible)?;
        Ok(())
    }
}

impl ChartAdapter for PunchcardChart {
    fn id(&self) -> &'static str {
        "punchcard"
    }

    fn mount(&mut self, surface: Box<dyn ChartSurface>) -> Result<(), ChartError> {
        self.base.mount(surface)
    }

    fn update(&mut self, stats: &TempStats) -> Result<(), ChartError> {
        if !self.base.is_mounted() {
            return Ok(());
        }
        let Some(last) = stats.last else {
            return Ok(());
        };
        let grid = self.nav.absorb(
            stats.first.map(|marker| marker.timestamp_ms),
            last.timestamp_ms,
            &stats.specific_days,
        );
        self.push_grid(grid)
    }

    fn unmount(&mut self) {
        self.base.release();
    }

    fn navigation(&mut self) -> Option<&mut dyn YearNavigation> {
        Some(self)
    }
}

impl YearNavigation for PunchcardChart {
    fn on_previous(&mut self) -> Result<(), ChartError> {
        let grid = self.nav.step_previous();
        self.push_grid(grid)
    }

    fn on_next(&mut self) -> Result<(), ChartError> {
        let grid = self.nav.step_next();
        self.push_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::NoTranslate;
    use crate::core::calendar;
    use crate::core::model::ScrobbleMarker;
    use crate::render::RecordingSurface;
    use std::collections::BTreeMap;
    use time::macros::date;

    fn chart() -> PunchcardChart {
        PunchcardChart::new(Rc::new(NoTranslate))
    }

    fn stats_2023_2024() -> TempStats {
        TempStats {
            first: Some(ScrobbleMarker::new(calendar::midnight_ms(date!(
                2023 - 11 - 11
            )))),
            last: Some(ScrobbleMarker::new(calendar::midnight_ms(date!(
                2024 - 06 - 15
            )))),
            specific_days: BTreeMap::from([
                (calendar::midnight_ms(date!(2023 - 11 - 11)), 8),
                (calendar::midnight_ms(date!(2024 - 01 - 07)), 5),
                (calendar::midnight_ms(date!(2024 - 06 - 15)), 2),
            ]),
            ..TempStats::default()
        }
    }

    #[test]
    fn update_renders_the_newest_year() {
        let surface = RecordingSurface::new();
        let mut chart = chart();
        chart.mount(Box::new(surface.clone())).unwrap();
        chart.update(&stats_2023_2024()).unwrap();

        let recorded = surface.recorded();
        assert_eq!(recorded.year_label.as_deref(), Some("2024"));
        assert_eq!(recorded.previous, Some(("2023".to_string(), true)));
        assert_eq!(recorded.next, Some(("2025".to_string(), false)));

        match surface.last_series() {
            Some(SeriesData::Heatmap(cells)) => assert_eq!(cells.len(), 2),
            other => panic!("expected heatmap, got {other:?}"),
        }
    }

    #[test]
    fn update_before_mount_is_dropped() {
        let mut chart = chart();
        chart.update(&stats_2023_2024()).unwrap();
        assert_eq!(chart.displayed_year(), 0);
    }

    #[test]
    fn empty_history_is_not_an_error() {
        let surface = RecordingSurface::new();
        let mut chart = chart();
        chart.mount(Box::new(surface.clone())).unwrap();
        chart.update(&TempStats::default()).unwrap();
        assert!(surface.recorded().series.is_empty());
    }

    #[test]
    fn paging_replaces_the_grid_with_the_prior_year() {
        let surface = RecordingSurface::new();
        let mut chart = chart();
        chart.mount(Box::new(surface.clone())).unwrap();
        chart.update(&stats_2023_2024()).unwrap();

        chart.on_previous().unwrap();
        let recorded = surface.recorded();
        assert_eq!(recorded.year_label.as_deref(), Some("2023"));
        assert_eq!(recorded.previous, Some(("2022".to_string(), false)));
        assert_eq!(recorded.next, Some(("2024".to_string(), true)));
        match surface.last_series() {
            Some(SeriesData::Heatmap(cells)) => {
                assert_eq!(cells.len(), 1);
                assert_eq!(cells[0].count, 8);
            }
            other => panic!("expected heatmap, got {other:?}"),
        }
    }

    #[test]
    fn tooltip_names_the_bucketed_date() {
        let surface = RecordingSurface::new();
        let mut chart = chart();
        chart.mount(Box::new(surface)).unwrap();
        chart.update(&stats_2023_2024()).unwrap();

        assert_eq!(
            chart.tooltip(1, 0, 5).as_deref(),
            Some("2024-01-07: 5 scrobbles")
        );
        assert_eq!(
            chart.tooltip(23, 6, 1).as_deref(),
            Some("2024-06-15: 1 scrobble")
        );
    }
}
