//! Read-only dashboard views over already-fetched collections.
//!
//! Pure functions: no I/O, no persisted state.

use serde::{Deserialize, Serialize};

use crate::lookups::TravelStatusKind;
use crate::schema::{LookupEntry, Trip};
use crate::types::Date;

/// How many trips the "recent trips" panel shows.
pub const RECENT_TRIPS_LIMIT: usize = 3;

/// Dashboard payload served by `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub next_trip: Option<Trip>,
    pub recent_trips: Vec<Trip>,
    pub trip_count: usize,
    pub destination_count: usize,
}

/// The earliest trip starting strictly after `today` whose status is "planned".
///
/// The planned status is resolved by label against `statuses`, so renumbered
/// lookup rows still match. Falls back to the seeded id when the label is
/// absent from the list.
pub fn next_upcoming_trip<'a>(
    trips: &'a [Trip],
    statuses: &[LookupEntry],
    today: Date,
) -> Option<&'a Trip> {
    let planned = TravelStatusKind::Planned;
    let planned_id = statuses
        .iter()
        .find(|s| s.label.eq_ignore_ascii_case(planned.label()))
        .map(|s| s.id)
        .unwrap_or_else(|| planned.id());

    trips
        .iter()
        .filter(|t| t.status_id == planned_id && t.start_date > today)
        .min_by_key(|t| t.start_date)
}

/// The first [`RECENT_TRIPS_LIMIT`] trips in list order.
///
/// List order stands in for recency; no sort key is applied.
pub fn recent_trips(trips: &[Trip]) -> &[Trip] {
    &trips[..trips.len().min(RECENT_TRIPS_LIMIT)]
}

/// Assemble the dashboard payload from fetched collections.
pub fn summarize(
    trips: &[Trip],
    statuses: &[LookupEntry],
    destination_count: usize,
    today: Date,
) -> DashboardSummary {
    DashboardSummary {
        next_trip: next_upcoming_trip(trips, statuses, today).cloned(),
        recent_trips: recent_trips(trips).to_vec(),
        trip_count: trips.len(),
        destination_count,
    }
}
