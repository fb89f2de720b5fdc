//! Route definitions for the `/destinations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::destination;
use crate::state::AppState;

/// Routes mounted at `/destinations`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/activities         -> list_activities
/// GET    /{id}/accommodations     -> list_accommodations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(destination::list).post(destination::create))
        .route(
            "/{id}",
            get(destination::get_by_id)
                .put(destination::update)
                .delete(destination::delete),
        )
        .route("/{id}/activities", get(destination::list_activities))
        .route("/{id}/accommodations", get(destination::list_accommodations))
}
