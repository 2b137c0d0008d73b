//! Chart adapters: each visualization derives its own series from a
//! [`TempStats`](crate::core::model::TempStats) snapshot and pushes it to
//! the rendering surface it exclusively owns.

pub mod artist_scrobble;
pub mod artist_timeline;
pub mod cumulative;
pub mod moment;
pub mod per_day;
pub mod punchcard;
pub mod race;
pub mod scatter;
pub mod timeline;
pub mod wordcloud;

pub use artist_scrobble::ArtistScrobbleChart;
pub use artist_timeline::ArtistTimelineChart;
pub use cumulative::CumulativeItemsChart;
pub use moment::ScrobbleMomentChart;
pub use per_day::ScrobblePerDayChart;
pub use punchcard::PunchcardChart;
pub use race::RaceChart;
pub use scatter::ScrobbleScatterChart;
pub use timeline::TimelineChart;
pub use wordcloud::WordcloudChart;

use std::rc::Rc;

use thiserror::Error;

use crate::core::model::TempStats;
use crate::render::{ChartSurface, SurfaceError};

/// Failure to push derived data to the rendering surface.
#[derive(Debug, Clone, Error)]
pub enum ChartError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Localization capability handed to adapters at construction. The actual
/// string lookup lives outside this crate.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Pass-through used when the host has no localization layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslate;

impl Translate for NoTranslate {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Year-paging hooks exposed by charts that navigate calendar years. The
/// rendering layer calls these on user interaction; there is no shared
/// mutable state between the surface and the adapter.
pub trait YearNavigation {
    fn on_previous(&mut self) -> Result<(), ChartError>;
    fn on_next(&mut self) -> Result<(), ChartError>;
}

/// Shared contract every visualization implements.
///
/// Lifecycle: constructed once, `mount`ed when the owning view appears,
/// `update`d zero or more times with fresh snapshots, `unmount`ed on
/// teardown. `update` is the only code path that pushes series data.
pub trait ChartAdapter {
    /// Stable identifier the host uses to route surfaces and report failures.
    fn id(&self) -> &'static str;

    /// Attach the rendering surface and apply the chart title.
    fn mount(&mut self, surface: Box<dyn ChartSurface>) -> Result<(), ChartError>;

    /// Recompute this chart's derived series from a fresh snapshot and push
    /// it to the mounted surface. A no-op when unmounted or when the
    /// snapshot carries no history yet.
    fn update(&mut self, stats: &TempStats) -> Result<(), ChartError>;

    /// Personalize titles with the resolved display name. Charts without
    /// personalized titles keep the default no-op.
    fn set_username(&mut self, _username: &str) -> Result<(), ChartError> {
        Ok(())
    }

    /// Release the rendering surface when the owning view goes away.
    fn unmount(&mut self);

    fn navigation(&mut self) -> Option<&mut dyn YearNavigation> {
        None
    }
}

/// Surface handle plus title state shared by every concrete adapter.
pub(crate) struct ChartBase {
    surface: Option<Box<dyn ChartSurface>>,
    title_key: &'static str,
    personalized: bool,
    username: Option<String>,
    tr: Rc<dyn Translate>,
}

impl ChartBase {
    pub(crate) fn new(tr: Rc<dyn Translate>, title_key: &'static str) -> Self {
        Self {
            surface: None,
            title_key,
            personalized: false,
            username: None,
            tr,
        }
    }

    /// A base whose title appends the resolved username once it is known.
    pub(crate) fn personalized(tr: Rc<dyn Translate>, title_key: &'static str) -> Self {
        Self {
            personalized: true,
            ..Self::new(tr, title_key)
        }
    }

    pub(crate) fn title(&self) -> String {
        let base = self.tr.translate(self.title_key);
        match (&self.username, self.personalized) {
            (Some(username), true) => format!("{base} for {username}"),
            _ => base,
        }
    }

    pub(crate) fn mount(&mut self, surface: Box<dyn ChartSurface>) -> Result<(), ChartError> {
        self.surface = Some(surface);
        self.push_title()
    }

    pub(crate) fn set_username(&mut self, username: &str) -> Result<(), ChartError> {
        self.username = Some(username.to_string());
        self.push_title()
    }

    fn push_title(&mut self) -> Result<(), ChartError> {
        let title = self.title();
        if let Some(surface) = self.surface() {
            surface.set_title(&title)?;
        }
        Ok(())
    }

    pub(crate) fn surface(&mut self) -> Option<&mut (dyn ChartSurface + 'static)> {
        self.surface.as_deref_mut()
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub(crate) fn release(&mut self) {
        self.surface = None;
    }
}
