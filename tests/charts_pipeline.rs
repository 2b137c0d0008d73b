//! End-to-end pass over the stock chart set: mount, snapshot fan-out,
//! punchcard year paging through the event channel, teardown.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use time::macros::date;

use scrobbleview::core::calendar;
use scrobbleview::core::model::{ArtistSnapshot, ScrobbleMarker, TempStats};
use scrobbleview::orchestrator::{event_channel, ChartOrchestrator, StatsEvent};
use scrobbleview::render::{RecordingSurface, SeriesData};
use scrobbleview::NoTranslate;

fn day(d: time::Date) -> i64 {
    calendar::midnight_ms(d)
}

fn sample_stats() -> TempStats {
    let mut hours = [0u32; 24];
    hours[22] = 40;
    let mut days = [0u32; 7];
    days[0] = 15;
    let mut months = [0u32; 12];
    months[5] = 22;

    TempStats {
        first: Some(ScrobbleMarker::new(day(date!(2023 - 03 - 01)))),
        last: Some(ScrobbleMarker::new(day(date!(2024 - 06 - 15)))),
        specific_days: BTreeMap::from([
            (day(date!(2023 - 03 - 01)), 7),
            (day(date!(2024 - 01 - 07)), 5),
            (day(date!(2024 - 06 - 15)), 2),
        ]),
        hours,
        days,
        months,
        seen_artists: HashMap::from([
            (
                "Radiohead".to_string(),
                ArtistSnapshot {
                    scrobbles: 120,
                    tracks: 40,
                },
            ),
            (
                "Autechre".to_string(),
                ArtistSnapshot {
                    scrobbles: 80,
                    tracks: 25,
                },
            ),
        ]),
        monthly: BTreeMap::from([
            ((2023, 3), HashMap::from([("Radiohead".to_string(), 7)])),
            (
                (2024, 1),
                HashMap::from([("Radiohead".to_string(), 60), ("Autechre".to_string(), 30)]),
            ),
            (
                (2024, 6),
                HashMap::from([("Radiohead".to_string(), 53), ("Autechre".to_string(), 50)]),
            ),
        ]),
    }
}

fn mounted() -> (ChartOrchestrator, HashMap<&'static str, RecordingSurface>) {
    let mut orchestrator = ChartOrchestrator::with_default_charts(Rc::new(NoTranslate));
    let mut surfaces = HashMap::new();
    orchestrator
        .mount_all(|id| {
            let surface = RecordingSurface::new();
            surfaces.insert(id, surface.clone());
            Box::new(surface)
        })
        .expect("mounting never fails on a recording surface");
    (orchestrator, surfaces)
}

#[test]
fn snapshot_reaches_all_twelve_charts() {
    let (mut orchestrator, surfaces) = mounted();
    orchestrator.broadcast(&sample_stats());

    assert!(orchestrator.failures().is_empty());
    assert_eq!(surfaces.len(), 12);
    for (id, surface) in &surfaces {
        assert_eq!(
            surface.recorded().series.len(),
            1,
            "chart {id} missed the snapshot"
        );
    }
}

#[test]
fn punchcard_buckets_and_pages_through_the_event_channel() {
    let (mut orchestrator, surfaces) = mounted();
    let stats = Rc::new(sample_stats());

    let (sender, receiver) = event_channel();
    sender.unbounded_send(StatsEvent::Username("shimun".to_string())).unwrap();
    sender.unbounded_send(StatsEvent::Snapshot(stats)).unwrap();
    sender.unbounded_send(StatsEvent::PreviousYear).unwrap();
    drop(sender);
    futures::executor::block_on(orchestrator.pump(receiver));
    assert!(orchestrator.failures().is_empty());

    let punchcard = &surfaces["punchcard"];
    let recorded = punchcard.recorded();

    // Two renders: the 2024 snapshot, then the paged 2023 view.
    assert_eq!(recorded.series.len(), 2);
    match &recorded.series[0] {
        SeriesData::Heatmap(cells) => {
            assert_eq!(cells.len(), 2);
            assert!(cells.iter().any(|c| c.week == 1 && c.weekday == 0 && c.count == 5));
            assert!(cells.iter().any(|c| c.week == 23 && c.weekday == 6 && c.count == 2));
        }
        other => panic!("expected heatmap, got {other:?}"),
    }
    match &recorded.series[1] {
        SeriesData::Heatmap(cells) => {
            // Only the 2023-03-01 entry survives the year filter.
            assert_eq!(cells.len(), 1);
            assert_eq!(cells[0].count, 7);
            assert_eq!(cells[0].weekday, 3); // a Wednesday
        }
        other => panic!("expected heatmap, got {other:?}"),
    }

    assert_eq!(recorded.year_label.as_deref(), Some("2023"));
    assert_eq!(recorded.previous, Some(("2022".to_string(), false)));
    assert_eq!(recorded.next, Some(("2024".to_string(), true)));
}

#[test]
fn personalized_titles_render_after_username_resolution() {
    let (mut orchestrator, surfaces) = mounted();
    orchestrator.set_username("shimun");

    assert_eq!(
        surfaces["timeline"].recorded().title.as_deref(),
        Some("Scrobbles for shimun")
    );
    assert_eq!(
        surfaces["punchcard"].recorded().title.as_deref(),
        Some("Number of scrobbles")
    );
}

#[test]
fn empty_history_renders_nothing_anywhere() {
    let (mut orchestrator, surfaces) = mounted();
    orchestrator.broadcast(&TempStats::default());

    assert!(orchestrator.failures().is_empty());
    for surface in surfaces.values() {
        assert!(surface.recorded().series.is_empty());
    }
}

#[test]
fn teardown_releases_every_surface() {
    let (mut orchestrator, _surfaces) = mounted();
    orchestrator.teardown();

    // Updates after teardown are dropped, never an error.
    orchestrator.broadcast(&sample_stats());
    assert!(orchestrator.failures().is_empty());
}
