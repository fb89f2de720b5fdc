//! Handlers for the `/users` resource, login and preferences.
//!
//! Login checks credentials and stamps `lastLogin`/`loginCount`; it does not
//! issue a session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_core::schema::{
    CreateUser, LoginRequest, UpdatePreferences, UpdateUser, User, UserPreferences, UserResponse,
};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::validate_id;
use wayfarer_db::repositories::{NewUser, PreferencesRepo, UserRepo};
use wayfarer_db::DbPool;

use crate::auth::password::{check_password_strength, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

async fn ensure_exists(pool: &DbPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    check_password_strength(&input.password, state.config.password_min_length)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let new_user = NewUser {
        username: &input.username,
        email: &input.email,
        password_hash: &password_hash,
        display_name: input.display_name.as_deref(),
        avatar_url: input.avatar_url.as_deref(),
        bio: input.bio.as_deref(),
    };
    let user = UserRepo::create(&state.pool, &new_user).await?;
    tracing::info!(id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = validate_id(raw_id)?;
    let user = ensure_exists(&state.pool, id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let id = validate_id(raw_id)?;
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
///
/// Entities owned by the user survive with their `userId` cleared.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = validate_id(raw_id)?;
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/users/login
///
/// Unknown users and wrong passwords get the same 401 so that usernames
/// cannot be discovered this way.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_login(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        tracing::debug!(user_id = user.id, "Login rejected");
        return Err(invalid());
    }

    let user = UserRepo::record_login(&state.pool, user.id)
        .await?
        .ok_or_else(|| not_found(user.id))?;
    tracing::info!(user_id = user.id, login_count = user.login_count, "User logged in");
    Ok(Json(user.into()))
}

/// GET /api/users/{id}/preferences
///
/// The default row is created on first read.
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<UserPreferences>> {
    let id = validate_id(raw_id)?;
    ensure_exists(&state.pool, id).await?;
    let prefs = PreferencesRepo::get_or_create(&state.pool, id).await?;
    Ok(Json(prefs))
}

/// PUT /api/users/{id}/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdatePreferences>,
) -> AppResult<Json<UserPreferences>> {
    let id = validate_id(raw_id)?;
    ensure_exists(&state.pool, id).await?;
    let prefs = PreferencesRepo::upsert(&state.pool, id, &input).await?;
    Ok(Json(prefs))
}
