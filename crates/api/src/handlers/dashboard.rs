//! Handler for the read-only dashboard summary.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use wayfarer_core::dashboard::{summarize, DashboardSummary};
use wayfarer_core::types::Date;
use wayfarer_db::repositories::{DestinationRepo, LookupRepo, LookupTable, TripRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    /// Reference date for "upcoming" (`YYYY-MM-DD`). Defaults to today (UTC).
    pub today: Option<Date>,
}

/// GET /api/dashboard
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<DashboardSummary>> {
    let today = params
        .today
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let (trips, statuses, destination_count) = tokio::try_join!(
        TripRepo::list(&state.pool),
        LookupRepo::list(&state.pool, LookupTable::Statuses),
        DestinationRepo::count(&state.pool),
    )?;

    let destination_count = usize::try_from(destination_count).unwrap_or_default();
    Ok(Json(summarize(&trips, &statuses, destination_count, today)))
}
