//! Route definitions shared by the two lookup resources.

use axum::routing::get;
use axum::{Extension, Router};
use wayfarer_db::repositories::LookupTable;

use crate::handlers::lookup;
use crate::state::AppState;

/// Routes mounted at `/travel-statuses` or `/travel-priority-levels`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router(table: LookupTable) -> Router<AppState> {
    Router::new()
        .route("/", get(lookup::list).post(lookup::create))
        .route(
            "/{id}",
            get(lookup::get_by_id)
                .put(lookup::update)
                .delete(lookup::delete),
        )
        .layer(Extension(table))
}
