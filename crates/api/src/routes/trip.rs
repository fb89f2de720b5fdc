//! Route definitions for the `/trips` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::trip;
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
/// GET    /{id}/destinations                   -> list_destinations
/// POST   /{id}/destinations                   -> link_destination
/// DELETE /{id}/destinations/{destination_id}  -> unlink_destination
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trip::list).post(trip::create))
        .route(
            "/{id}",
            get(trip::get_by_id).put(trip::update).delete(trip::delete),
        )
        .route(
            "/{id}/destinations",
            get(trip::list_destinations).post(trip::link_destination),
        )
        .route(
            "/{id}/destinations/{destination_id}",
            delete(trip::unlink_destination),
        )
}
