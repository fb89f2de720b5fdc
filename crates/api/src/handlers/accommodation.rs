//! Handlers for the `/accommodations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_core::schema::{Accommodation, CreateAccommodation, UpdateAccommodation};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::validate_id;
use wayfarer_db::repositories::AccommodationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Accommodation",
        id,
    })
}

/// POST /api/accommodations
///
/// An unknown `destinationId` is rejected by the foreign key and reported
/// against that field.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAccommodation>,
) -> AppResult<(StatusCode, Json<Accommodation>)> {
    let accommodation = AccommodationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = accommodation.id,
        destination_id = accommodation.destination_id,
        "Accommodation created"
    );
    Ok((StatusCode::CREATED, Json(accommodation)))
}

/// GET /api/accommodations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Accommodation>>> {
    let accommodations = AccommodationRepo::list(&state.pool).await?;
    Ok(Json(accommodations))
}

/// GET /api/accommodations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Accommodation>> {
    let id = validate_id(raw_id)?;
    let accommodation = AccommodationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(accommodation))
}

/// PUT /api/accommodations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateAccommodation>,
) -> AppResult<Json<Accommodation>> {
    let id = validate_id(raw_id)?;
    let accommodation = AccommodationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(accommodation))
}

/// DELETE /api/accommodations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(raw_id)?;
    if AccommodationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
