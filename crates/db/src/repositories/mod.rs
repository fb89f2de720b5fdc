//! Repository structs, one per table.
//!
//! Each repository is a zero-sized struct with associated async functions
//! taking `&PgPool`, so handlers call e.g. `DestinationRepo::list(&pool)`.

pub mod accommodation_repo;
pub mod activity_repo;
pub mod destination_repo;
pub mod lookup_repo;
pub mod preferences_repo;
pub mod trip_destination_repo;
pub mod trip_repo;
pub mod user_repo;

pub use accommodation_repo::AccommodationRepo;
pub use activity_repo::ActivityRepo;
pub use destination_repo::DestinationRepo;
pub use lookup_repo::{LookupRepo, LookupTable};
pub use preferences_repo::PreferencesRepo;
pub use trip_destination_repo::TripDestinationRepo;
pub use trip_repo::TripRepo;
pub use user_repo::{NewUser, UserRepo};
