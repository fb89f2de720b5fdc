use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfarer_core::error::{CoreError, InvalidId};
use wayfarer_core::validation::FieldErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
///
/// ```json
/// { "error": "...", "code": "VALIDATION_ERROR", "fieldErrors": { "name": ["Name is required"] } }
/// ```
///
/// `fieldErrors` is present only when the failure can be pinned to fields.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wayfarer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Core(CoreError::Validation(errors))
    }
}

impl From<InvalidId> for AppError {
    fn from(err: InvalidId) -> Self {
        AppError::Core(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Classify a failed delete. A foreign key violation here means the row
    /// is still referenced, which is a conflict rather than bad input.
    pub fn from_delete(err: sqlx::Error, entity: &str, id: impl std::fmt::Display) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return AppError::Core(CoreError::Conflict(format!(
                    "{entity} with id {id} is still referenced and cannot be deleted"
                )));
            }
        }
        AppError::Database(err)
    }
}

/// Status, code, message and optional field errors of a response.
type ErrorParts = (StatusCode, &'static str, String, Option<FieldErrors>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, field_errors) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                    Some(errors),
                ),
                CoreError::InvalidId(raw) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_ID",
                    format!("Invalid identifier: {raw}"),
                    None,
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg, None),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(errors) = field_errors {
            body["fieldErrors"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

fn internal_error() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}

/// Classify a sqlx error into response parts.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (`uq_*`) map to 409, with the offending field when known.
/// - Foreign key violations (`fk_*`) on writes map to 400 against the FK field.
/// - Check violations (`ck_*`) map to 400, with the field when known.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                    let field_errors = unique_field(constraint)
                        .map(|(field, label)| {
                            FieldErrors::single(field, format!("{label} is already taken"))
                        });
                    (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                        field_errors,
                    )
                }
                Some(FOREIGN_KEY_VIOLATION) if constraint.starts_with("fk_") => {
                    let field_errors = foreign_key_field(constraint).map(|(field, label)| {
                        FieldErrors::single(field, format!("{label} does not exist"))
                    });
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Referenced row does not exist: {constraint}"),
                        field_errors,
                    )
                }
                Some(CHECK_VIOLATION) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {constraint}"),
                    check_field(constraint).map(|(field, msg)| FieldErrors::single(field, msg)),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    internal_error()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

/// Wire field and label for a unique constraint.
fn unique_field(constraint: &str) -> Option<(&'static str, &'static str)> {
    match constraint {
        "uq_users_username" => Some(("username", "Username")),
        "uq_users_email" => Some(("email", "Email")),
        "uq_travel_statuses_label" | "uq_travel_priority_levels_label" => {
            Some(("label", "Label"))
        }
        _ => None,
    }
}

/// Wire field and label for a foreign key constraint, keyed on the column
/// suffix of `fk_<table>_<column>`.
fn foreign_key_field(constraint: &str) -> Option<(&'static str, &'static str)> {
    let column = constraint.rsplit('_').next()?;
    match column {
        "status" => Some(("statusId", "Status")),
        "priority" => Some(("priorityId", "Priority")),
        "destination" => Some(("destinationId", "Destination")),
        "trip" => Some(("tripId", "Trip")),
        "user" => Some(("userId", "User")),
        _ => None,
    }
}

/// Wire field and message for a check constraint.
fn check_field(constraint: &str) -> Option<(&'static str, &'static str)> {
    match constraint {
        "ck_trips_date_order" => Some(("endDate", "End date must be on or after the start date")),
        _ => None,
    }
}
