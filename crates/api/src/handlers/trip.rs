//! Handlers for the `/trips` resource and its destination links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_core::schema::{CreateTrip, Destination, LinkDestination, Trip, TripDestination, UpdateTrip};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::validate_id;
use wayfarer_db::repositories::{TripDestinationRepo, TripRepo};
use wayfarer_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Trip", id })
}

async fn ensure_exists(pool: &DbPool, id: DbId) -> AppResult<Trip> {
    TripRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/trips
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    let trip = TripRepo::create(&state.pool, &input).await?;
    tracing::info!(id = trip.id, start = %trip.start_date, end = %trip.end_date, "Trip created");
    Ok((StatusCode::CREATED, Json(trip)))
}

/// GET /api/trips
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Trip>>> {
    let trips = TripRepo::list(&state.pool).await?;
    Ok(Json(trips))
}

/// GET /api/trips/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Trip>> {
    let id = validate_id(raw_id)?;
    Ok(Json(ensure_exists(&state.pool, id).await?))
}

/// PUT /api/trips/{id}
///
/// When only one date is sent, ordering against the stored date is enforced
/// by the `ck_trips_date_order` check and reported against `endDate`.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTrip>,
) -> AppResult<Json<Trip>> {
    let id = validate_id(raw_id)?;
    let trip = TripRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(trip))
}

/// DELETE /api/trips/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(raw_id)?;
    if TripRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/trips/{id}/destinations
pub async fn list_destinations(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Destination>>> {
    let id = validate_id(raw_id)?;
    ensure_exists(&state.pool, id).await?;
    let destinations = TripDestinationRepo::list_destinations(&state.pool, id).await?;
    Ok(Json(destinations))
}

/// POST /api/trips/{id}/destinations
///
/// Linking an already-linked destination returns the existing link.
pub async fn link_destination(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<LinkDestination>,
) -> AppResult<(StatusCode, Json<TripDestination>)> {
    let id = validate_id(raw_id)?;
    ensure_exists(&state.pool, id).await?;
    let link = TripDestinationRepo::link(&state.pool, id, input.destination_id).await?;
    tracing::debug!(trip_id = id, destination_id = input.destination_id, "Destination linked");
    Ok((StatusCode::CREATED, Json(link)))
}

/// DELETE /api/trips/{id}/destinations/{destination_id}
pub async fn unlink_destination(
    State(state): State<AppState>,
    Path((raw_trip_id, raw_destination_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let trip_id = validate_id(raw_trip_id)?;
    let destination_id = validate_id(raw_destination_id)?;
    if TripDestinationRepo::unlink(&state.pool, trip_id, destination_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TripDestination",
            id: destination_id,
        }))
    }
}
