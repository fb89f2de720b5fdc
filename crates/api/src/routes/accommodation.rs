//! Route definitions for the `/accommodations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::accommodation;
use crate::state::AppState;

/// Routes mounted at `/accommodations`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(accommodation::list).post(accommodation::create))
        .route(
            "/{id}",
            get(accommodation::get_by_id)
                .put(accommodation::update)
                .delete(accommodation::delete),
        )
}
