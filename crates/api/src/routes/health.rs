//! Health check at `/health`, outside the `/api` prefix.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use wayfarer_db::repositories::{LookupRepo, LookupTable};
use wayfarer_db::DbPool;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or the lookup
    /// tables are empty.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Both lookup tables hold at least one row, so forms have options.
    pub lookups_seeded: bool,
}

async fn lookups_seeded(pool: &DbPool) -> bool {
    let (statuses, priorities) = tokio::join!(
        LookupRepo::list(pool, LookupTable::Statuses),
        LookupRepo::list(pool, LookupTable::PriorityLevels),
    );
    matches!((statuses, priorities), (Ok(s), Ok(p)) if !s.is_empty() && !p.is_empty())
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = wayfarer_db::health_check(&state.pool).await.is_ok();
    let lookups_seeded = db_healthy && lookups_seeded(&state.pool).await;
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    } else if !lookups_seeded {
        tracing::warn!("Health check: travel status or priority table is empty");
    }

    Json(HealthResponse {
        status: if lookups_seeded { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        lookups_seeded,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
