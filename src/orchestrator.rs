//! Fan-out of statistics snapshots to every registered chart adapter.

use std::rc::Rc;

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;

use crate::charts::{
    ArtistScrobbleChart, ArtistTimelineChart, ChartAdapter, ChartError, CumulativeItemsChart,
    PunchcardChart, RaceChart, ScrobbleMomentChart, ScrobblePerDayChart, ScrobbleScatterChart,
    TimelineChart, Translate, WordcloudChart,
};
use crate::core::model::TempStats;
use crate::render::ChartSurface;

/// One adapter's failure during a fan-out pass. The chart keeps its
/// last-good render; the host decides whether to surface the message.
#[derive(Debug, Clone)]
pub struct ChartFailure {
    pub chart: &'static str,
    pub error: ChartError,
}

/// Events pushed by the statistics provider and the host UI. Snapshots are
/// shared read-only across the fan-out pass.
#[derive(Debug, Clone)]
pub enum StatsEvent {
    Snapshot(Rc<TempStats>),
    Username(String),
    PreviousYear,
    NextYear,
}

/// Channel the provider and the navigation affordances push into.
pub fn event_channel() -> (UnboundedSender<StatsEvent>, UnboundedReceiver<StatsEvent>) {
    mpsc::unbounded()
}

/// Owns the charts in registration order and guarantees each snapshot
/// reaches every one of them exactly once, failures isolated per chart.
#[derive(Default)]
pub struct ChartOrchestrator {
    charts: Vec<Box<dyn ChartAdapter>>,
    username: Option<String>,
    failures: Vec<ChartFailure>,
}

impl ChartOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The twelve stock charts, in their on-page order.
    pub fn with_default_charts(tr: Rc<dyn Translate>) -> Self {
        let mut orchestrator = Self::new();
        orchestrator.register(Box::new(TimelineChart::new(tr.clone())));
        orchestrator.register(Box::new(ArtistScrobbleChart::new(tr.clone())));
        orchestrator.register(Box::new(ArtistTimelineChart::new(tr.clone())));
        orchestrator.register(Box::new(CumulativeItemsChart::new(tr.clone())));
        orchestrator.register(Box::new(WordcloudChart::new()));
        orchestrator.register(Box::new(PunchcardChart::new(tr.clone())));
        orchestrator.register(Box::new(ScrobbleScatterChart::new(tr.clone())));
        orchestrator.register(Box::new(ScrobblePerDayChart::new(tr.clone())));
        orchestrator.register(Box::new(RaceChart::new(tr.clone())));
        orchestrator.register(Box::new(ScrobbleMomentChart::hours(tr.clone())));
        orchestrator.register(Box::new(ScrobbleMomentChart::days(tr.clone())));
        orchestrator.register(Box::new(ScrobbleMomentChart::months(tr)));
        orchestrator
    }

    pub fn register(&mut self, chart: Box<dyn ChartAdapter>) {
        self.charts.push(chart);
    }

    pub fn chart_ids(&self) -> Vec<&'static str> {
        self.charts.iter().map(|chart| chart.id()).collect()
    }

    /// Attach one surface per chart, keyed by chart id.
    pub fn mount_all(
        &mut self,
        mut make_surface: impl FnMut(&'static str) -> Box<dyn ChartSurface>,
    ) -> Result<(), ChartError> {
        for chart in &mut self.charts {
            let surface = make_surface(chart.id());
            chart.mount(surface)?;
        }
        Ok(())
    }

    /// Deliver one snapshot to every chart, in registration order, exactly
    /// once. A failing chart never blocks the rest.
    pub fn broadcast(&mut self, stats: &TempStats) {
        self.failures.clear();
        for chart in &mut self.charts {
            if let Err(error) = chart.update(stats) {
                self.failures.push(ChartFailure {
                    chart: chart.id(),
                    error,
                });
            }
        }
    }

    /// Propagate the resolved display name to every chart, at most once per
    /// session; later calls are ignored.
    pub fn set_username(&mut self, username: &str) {
        if self.username.is_some() {
            return;
        }
        self.username = Some(username.to_string());
        for chart in &mut self.charts {
            let id = chart.id();
            if let Err(error) = chart.set_username(username) {
                self.failures.push(ChartFailure { chart: id, error });
            }
        }
    }

    fn navigate(&mut self, forward: bool) {
        for chart in &mut self.charts {
            let id = chart.id();
            if let Some(nav) = chart.navigation() {
                let result = if forward {
                    nav.on_next()
                } else {
                    nav.on_previous()
                };
                if let Err(error) = result {
                    self.failures.push(ChartFailure { chart: id, error });
                }
            }
        }
    }

    /// Failures collected since the last broadcast.
    pub fn failures(&self) -> &[ChartFailure] {
        &self.failures
    }

    /// Drive the orchestrator from the provider's push channel until every
    /// sender is gone. Dropping the senders severs the subscription.
    pub async fn pump(&mut self, mut events: UnboundedReceiver<StatsEvent>) {
        while let Some(event) = events.next().await {
            match event {
                StatsEvent::Snapshot(stats) => self.broadcast(&stats),
                StatsEvent::Username(name) => self.set_username(&name),
                StatsEvent::PreviousYear => self.navigate(false),
                StatsEvent::NextYear => self.navigate(true),
            }
        }
    }

    /// Release every chart's rendering surface.
    pub fn teardown(&mut self) {
        for chart in &mut self.charts {
            chart.unmount();
        }
    }
}
