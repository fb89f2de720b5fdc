//! Request extractors shared by the handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use wayfarer_core::validation::{validate_input, InputSchema};

use crate::error::AppError;

/// JSON body that has been normalized (trimmed) and validated.
///
/// Malformed JSON is rejected as `BAD_REQUEST`. A body that parses but breaks
/// schema rules is rejected as `VALIDATION_ERROR` listing every bad field.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTrip>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + InputSchema + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        let value = validate_input(value)?;
        Ok(ValidatedJson(value))
    }
}
