//! Handlers for the lookup resources (`/travel-statuses`,
//! `/travel-priority-levels`).
//!
//! Both share one set of handlers; the router attaches the [`LookupTable`]
//! they operate on as an [`Extension`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use wayfarer_core::error::CoreError;
use wayfarer_core::schema::{CreateLookup, LookupEntry, UpdateLookup};
use wayfarer_core::types::{DbId, LookupId};
use wayfarer_core::validation::validate_id;
use wayfarer_db::repositories::{LookupRepo, LookupTable};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Parse a lookup id, which must also fit the `SMALLINT` key.
fn parse_lookup_id(raw: String) -> AppResult<LookupId> {
    let id = validate_id(raw.as_str())?;
    LookupId::try_from(id).map_err(|_| AppError::Core(CoreError::InvalidId(raw)))
}

fn not_found(table: LookupTable, id: LookupId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: table.entity_name(),
        id: DbId::from(id),
    })
}

/// GET /api/{lookup}
pub async fn list(
    State(state): State<AppState>,
    Extension(table): Extension<LookupTable>,
) -> AppResult<Json<Vec<LookupEntry>>> {
    let rows = LookupRepo::list(&state.pool, table).await?;
    Ok(Json(rows))
}

/// POST /api/{lookup}
pub async fn create(
    State(state): State<AppState>,
    Extension(table): Extension<LookupTable>,
    ValidatedJson(input): ValidatedJson<CreateLookup>,
) -> AppResult<(StatusCode, Json<LookupEntry>)> {
    let row = LookupRepo::create(&state.pool, table, &input).await?;
    tracing::info!(table = table.table_name(), id = row.id, label = %row.label, "Lookup row created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/{lookup}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(table): Extension<LookupTable>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<LookupEntry>> {
    let id = parse_lookup_id(raw_id)?;
    let row = LookupRepo::find_by_id(&state.pool, table, id)
        .await?
        .ok_or_else(|| not_found(table, id))?;
    Ok(Json(row))
}

/// PUT /api/{lookup}/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(table): Extension<LookupTable>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateLookup>,
) -> AppResult<Json<LookupEntry>> {
    let id = parse_lookup_id(raw_id)?;
    let row = LookupRepo::update(&state.pool, table, id, &input)
        .await?
        .ok_or_else(|| not_found(table, id))?;
    Ok(Json(row))
}

/// DELETE /api/{lookup}/{id}
///
/// Rows still referenced by any entity are kept and the request fails with
/// 409.
pub async fn delete(
    State(state): State<AppState>,
    Extension(table): Extension<LookupTable>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_lookup_id(raw_id)?;
    let deleted = LookupRepo::delete(&state.pool, table, id)
        .await
        .map_err(|e| AppError::from_delete(e, table.entity_name(), id))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(table, id))
    }
}
