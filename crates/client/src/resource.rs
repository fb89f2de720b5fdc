//! Binds each entity to its wire path and schema types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wayfarer_core::schema::{
    Accommodation, Activity, CreateAccommodation, CreateActivity, CreateDestination, CreateTrip,
    Destination, Trip, UpdateAccommodation, UpdateActivity, UpdateDestination, UpdateTrip,
};
use wayfarer_core::types::DbId;
use wayfarer_core::validation::InputSchema;

/// An entity served under `/api/{ENTITY}`.
pub trait Resource {
    /// Path segment and cache scope, e.g. `destinations`.
    const ENTITY: &'static str;

    type Row: Serialize + DeserializeOwned + Send + Sync;
    type Create: InputSchema + Serialize + Send + Sync;
    type Update: InputSchema + Serialize + Send + Sync;

    fn collection_path() -> String {
        format!("/api/{}", Self::ENTITY)
    }

    fn item_path(id: DbId) -> String {
        format!("/api/{}/{id}", Self::ENTITY)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Destinations;

#[derive(Debug, Clone, Copy)]
pub struct Activities;

#[derive(Debug, Clone, Copy)]
pub struct Accommodations;

#[derive(Debug, Clone, Copy)]
pub struct Trips;

impl Resource for Destinations {
    const ENTITY: &'static str = "destinations";
    type Row = Destination;
    type Create = CreateDestination;
    type Update = UpdateDestination;
}

impl Resource for Activities {
    const ENTITY: &'static str = "activities";
    type Row = Activity;
    type Create = CreateActivity;
    type Update = UpdateActivity;
}

impl Resource for Accommodations {
    const ENTITY: &'static str = "accommodations";
    type Row = Accommodation;
    type Create = CreateAccommodation;
    type Update = UpdateAccommodation;
}

impl Resource for Trips {
    const ENTITY: &'static str = "trips";
    type Row = Trip;
    type Create = CreateTrip;
    type Update = UpdateTrip;
}
