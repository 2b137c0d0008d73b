//! Chart adapters for listening-history statistics.
//!
//! The host application periodically builds an immutable [`TempStats`]
//! aggregate and pushes it through the [`ChartOrchestrator`], which fans it
//! out to every registered chart adapter. Each adapter derives its own
//! view-local series and hands it to the rendering engine through the
//! [`render::ChartSurface`] seam. Rendering mechanics, history fetching and
//! localization lookup all live outside this crate.

pub mod charts;
pub mod core;
pub mod orchestrator;
pub mod render;

pub use crate::charts::{ChartAdapter, ChartError, NoTranslate, Translate};
pub use crate::core::model::TempStats;
pub use crate::orchestrator::{ChartOrchestrator, StatsEvent};
