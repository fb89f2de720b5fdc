//! Entity shapes and their insert/update schemas.
//!
//! Each submodule contains:
//! - A row struct matching the database table (`FromRow` behind the `sqlx` feature)
//! - A `Create*` insert schema omitting server-assigned fields
//! - An `Update*` partial schema (all `Option` fields) judged by the same rules
//!
//! Create schemas default every field (`#[serde(default)]`), so a missing
//! field surfaces as a field-level validation error rather than a
//! deserialization failure. The same defaults seed empty forms.

pub mod accommodation;
pub mod activity;
pub mod destination;
pub mod lookup;
pub mod preferences;
pub mod trip;
pub mod trip_destination;
pub mod user;

pub use accommodation::{Accommodation, CreateAccommodation, UpdateAccommodation};
pub use activity::{Activity, CreateActivity, UpdateActivity};
pub use destination::{CreateDestination, Destination, UpdateDestination};
pub use lookup::{CreateLookup, LookupEntry, TravelPriorityLevel, TravelStatus, UpdateLookup};
pub use preferences::{UpdatePreferences, UserPreferences};
pub use trip::{CreateTrip, Trip, UpdateTrip};
pub use trip_destination::{LinkDestination, TripDestination};
pub use user::{CreateUser, LoginRequest, UpdateUser, User, UserResponse};
