//! `trip_destinations` join rows linking trips to destinations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};
use crate::validation::{InputSchema, Normalize};

/// A row from the `trip_destinations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TripDestination {
    pub id: DbId,
    pub trip_id: DbId,
    pub destination_id: DbId,
    pub created_at: Timestamp,
}

/// Body of `POST /api/trips/{id}/destinations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkDestination {
    #[validate(range(min = 1, message = "Destination is required"))]
    pub destination_id: DbId,
}

impl Normalize for LinkDestination {
    fn normalize(&mut self) {}
}

impl InputSchema for LinkDestination {}
