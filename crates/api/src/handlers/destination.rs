//! Handlers for the `/destinations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_core::schema::{
    Accommodation, Activity, CreateDestination, Destination, UpdateDestination,
};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::validate_id;
use wayfarer_db::repositories::{AccommodationRepo, ActivityRepo, DestinationRepo};
use wayfarer_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Destination",
        id,
    })
}

/// Fail with 404 unless the destination exists.
pub(crate) async fn ensure_exists(pool: &DbPool, id: DbId) -> AppResult<Destination> {
    DestinationRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/destinations
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDestination>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    let destination = DestinationRepo::create(&state.pool, &input).await?;
    tracing::info!(id = destination.id, name = %destination.name, "Destination created");
    Ok((StatusCode::CREATED, Json(destination)))
}

/// GET /api/destinations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Destination>>> {
    let destinations = DestinationRepo::list(&state.pool).await?;
    Ok(Json(destinations))
}

/// GET /api/destinations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Destination>> {
    let id = validate_id(raw_id)?;
    let destination = ensure_exists(&state.pool, id).await?;
    Ok(Json(destination))
}

/// PUT /api/destinations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateDestination>,
) -> AppResult<Json<Destination>> {
    let id = validate_id(raw_id)?;
    let destination = DestinationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(destination))
}

/// DELETE /api/destinations/{id}
///
/// Activities, accommodations and trip links of the destination are removed
/// with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(raw_id)?;
    if DestinationRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Destination deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/destinations/{id}/activities
pub async fn list_activities(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Activity>>> {
    let id = validate_id(raw_id)?;
    ensure_exists(&state.pool, id).await?;
    let activities = ActivityRepo::list_by_destination(&state.pool, id).await?;
    Ok(Json(activities))
}

/// GET /api/destinations/{id}/accommodations
pub async fn list_accommodations(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Accommodation>>> {
    let id = validate_id(raw_id)?;
    ensure_exists(&state.pool, id).await?;
    let accommodations = AccommodationRepo::list_by_destination(&state.pool, id).await?;
    Ok(Json(accommodations))
}
