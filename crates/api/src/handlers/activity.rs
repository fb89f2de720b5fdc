//! Handlers for the `/activities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_core::schema::{Activity, CreateActivity, UpdateActivity};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::validate_id;
use wayfarer_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Activity",
        id,
    })
}

/// POST /api/activities
///
/// An unknown `destinationId` is rejected by the foreign key and reported
/// against that field.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let activity = ActivityRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = activity.id,
        destination_id = activity.destination_id,
        "Activity created"
    );
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/activities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(activities))
}

/// GET /api/activities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Activity>> {
    let id = validate_id(raw_id)?;
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(activity))
}

/// PUT /api/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateActivity>,
) -> AppResult<Json<Activity>> {
    let id = validate_id(raw_id)?;
    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(activity))
}

/// DELETE /api/activities/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(raw_id)?;
    if ActivityRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
