//! The aggregate statistics snapshot consumed by every chart adapter.

use std::collections::{BTreeMap, HashMap};

use crate::core::calendar;

pub const HOUR_SLOTS: usize = 24;
pub const WEEKDAY_SLOTS: usize = 7;
pub const MONTH_SLOTS: usize = 12;

pub const WEEKDAY_NAMES: [&str; WEEKDAY_SLOTS] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; MONTH_SLOTS] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Marker for the first or last scrobble in the observed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrobbleMarker {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

impl ScrobbleMarker {
    pub fn new(timestamp_ms: i64) -> Self {
        Self { timestamp_ms }
    }

    /// Calendar year of the marker, when representable.
    pub fn year(self) -> Option<i32> {
        calendar::year_of_ms(self.timestamp_ms)
    }
}

/// Per-artist aggregate used by the artist-centric charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtistSnapshot {
    pub scrobbles: u32,
    pub tracks: u32,
}

/// One immutable aggregate snapshot from the statistics builder.
///
/// Adapters only ever read a snapshot; a fresh one replaces it wholesale on
/// the next build pass. `hours`/`days`/`months` are fixed-length count
/// arrays indexed by category position (hour of day, weekday from Sunday,
/// month from January).
#[derive(Debug, Clone, PartialEq)]
pub struct TempStats {
    pub first: Option<ScrobbleMarker>,
    pub last: Option<ScrobbleMarker>,
    /// Day-normalized midnight timestamp (ms) -> scrobbles that day.
    pub specific_days: BTreeMap<i64, u32>,
    pub hours: [u32; HOUR_SLOTS],
    pub days: [u32; WEEKDAY_SLOTS],
    pub months: [u32; MONTH_SLOTS],
    pub seen_artists: HashMap<String, ArtistSnapshot>,
    /// (year, month 1-12) -> per-artist scrobbles within that month.
    pub monthly: BTreeMap<(i32, u8), HashMap<String, u32>>,
}

impl Default for TempStats {
    fn default() -> Self {
        Self {
            first: None,
            last: None,
            specific_days: BTreeMap::new(),
            hours: [0; HOUR_SLOTS],
            days: [0; WEEKDAY_SLOTS],
            months: [0; MONTH_SLOTS],
            seen_artists: HashMap::new(),
            monthly: BTreeMap::new(),
        }
    }
}
