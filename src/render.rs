//! Seam between chart adapters and the host rendering engine.
//!
//! Pushes are replace-style: one [`SeriesData`] payload stands for the whole
//! series, so a surface never accumulates residue from an earlier year or
//! snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

/// One cell of the punchcard heatmap: week-of-year column, weekday row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatCell {
    pub week: u32,
    /// 0 = Sunday … 6 = Saturday.
    pub weekday: u8,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    pub timestamp_ms: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnPoint {
    pub category: String,
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceFrame {
    pub label: String,
    pub entries: Vec<RankedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWeight {
    pub word: String,
    pub weight: u32,
}

/// Full replacement payload for one chart's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SeriesData {
    Heatmap(Vec<HeatCell>),
    Line(Vec<TimePoint>),
    Scatter(Vec<LabelledPoint>),
    Columns {
        categories: Vec<String>,
        values: Vec<u32>,
    },
    LabelledColumns(Vec<ColumnPoint>),
    MultiLine {
        categories: Vec<String>,
        series: Vec<NamedSeries>,
    },
    Weights(Vec<WordWeight>),
    Frames(Vec<RaceFrame>),
}

impl SeriesData {
    /// JSON rendition for host-side export.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Heatmap(cells) => cells.len(),
            Self::Line(points) => points.len(),
            Self::Scatter(points) => points.len(),
            Self::Columns { values, .. } => values.len(),
            Self::LabelledColumns(columns) => columns.len(),
            Self::MultiLine { series, .. } => series.len(),
            Self::Weights(weights) => weights.len(),
            Self::Frames(frames) => frames.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Previous,
    Next,
}

/// Raised when the host surface rejects a push.
#[derive(Debug, Clone, Error)]
#[error("surface rejected {0}")]
pub struct SurfaceError(pub String);

/// The rendering engine as seen from an adapter. One instance per chart,
/// exclusively owned, attached on mount and released on teardown.
pub trait ChartSurface {
    /// Replace the rendered series wholesale.
    fn replace_series(&mut self, data: SeriesData) -> Result<(), SurfaceError>;

    fn set_title(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Year indicator drawn above the punchcard grid.
    fn set_year_label(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Caption and visibility for one year-navigation control.
    fn set_control(
        &mut self,
        control: NavControl,
        caption: &str,
        visible: bool,
    ) -> Result<(), SurfaceError>;
}

/// Everything a [`RecordingSurface`] has been asked to draw.
#[derive(Debug, Default, Clone)]
pub struct Recorded {
    pub series: Vec<SeriesData>,
    pub title: Option<String>,
    pub year_label: Option<String>,
    pub previous: Option<(String, bool)>,
    pub next: Option<(String, bool)>,
}

/// Capture-only surface for host smoke tests. Clones share the recording,
/// so a test can keep a handle after moving a clone into `mount`.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    recorded: Rc<RefCell<Recorded>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything pushed so far.
    pub fn recorded(&self) -> Recorded {
        self.recorded.borrow().clone()
    }

    pub fn last_series(&self) -> Option<SeriesData> {
        self.recorded.borrow().series.last().cloned()
    }
}

impl ChartSurface for RecordingSurface {
    fn replace_series(&mut self, data: SeriesData) -> Result<(), SurfaceError> {
        self.recorded.borrow_mut().series.push(data);
        Ok(())
    }

    fn set_title(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.recorded.borrow_mut().title = Some(text.to_string());
        Ok(())
    }

    fn set_year_label(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.recorded.borrow_mut().year_label = Some(text.to_string());
        Ok(())
    }

    fn set_control(
        &mut self,
        control: NavControl,
        caption: &str,
        visible: bool,
    ) -> Result<(), SurfaceError> {
        let mut recorded = self.recorded.borrow_mut();
        let slot = match control {
            NavControl::Previous => &mut recorded.previous,
            NavControl::Next => &mut recorded.next,
        };
        *slot = Some((caption.to_string(), visible));
        Ok(())
    }
}
