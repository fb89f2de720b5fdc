pub mod accommodation;
pub mod activity;
pub mod dashboard;
pub mod destination;
pub mod health;
pub mod lookup;
pub mod trip;
pub mod user;

use axum::Router;
use wayfarer_db::repositories::LookupTable;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /destinations                                    list, create
/// /destinations/{id}                               get, update, delete
/// /destinations/{id}/activities                    list activities at a destination
/// /destinations/{id}/accommodations                list accommodations at a destination
///
/// /activities                                      list, create
/// /activities/{id}                                 get, update, delete
///
/// /accommodations                                  list, create
/// /accommodations/{id}                             get, update, delete
///
/// /trips                                           list, create
/// /trips/{id}                                      get, update, delete
/// /trips/{id}/destinations                         list linked, link
/// /trips/{id}/destinations/{destination_id}        unlink
///
/// /travel-statuses                                 list, create
/// /travel-statuses/{id}                            get, update, delete
/// /travel-priority-levels                          list, create
/// /travel-priority-levels/{id}                     get, update, delete
///
/// /users                                           list, create
/// /users/login                                     login (POST)
/// /users/{id}                                      get, update, delete
/// /users/{id}/preferences                          get, update
///
/// /dashboard                                       summary (?today=YYYY-MM-DD)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/destinations", destination::router())
        .nest("/activities", activity::router())
        .nest("/accommodations", accommodation::router())
        .nest("/trips", trip::router())
        .nest("/travel-statuses", lookup::router(LookupTable::Statuses))
        .nest(
            "/travel-priority-levels",
            lookup::router(LookupTable::PriorityLevels),
        )
        .nest("/users", user::router())
        .merge(dashboard::router())
}
