//! Repository for the `trip_destinations` join table.

use sqlx::PgPool;
use wayfarer_core::schema::{Destination, TripDestination};
use wayfarer_core::types::DbId;

const COLUMNS: &str = "id, trip_id, destination_id, created_at";

/// Links and unlinks destinations on trips.
pub struct TripDestinationRepo;

impl TripDestinationRepo {
    /// Link a destination to a trip. Linking an already-linked pair is a
    /// no-op that returns the existing row.
    pub async fn link(
        pool: &PgPool,
        trip_id: DbId,
        destination_id: DbId,
    ) -> Result<TripDestination, sqlx::Error> {
        let query = format!(
            "INSERT INTO trip_destinations (trip_id, destination_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_trip_destinations_pair \
             DO UPDATE SET trip_id = EXCLUDED.trip_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripDestination>(&query)
            .bind(trip_id)
            .bind(destination_id)
            .fetch_one(pool)
            .await
    }

    /// Remove a link. Returns `false` when the pair was not linked.
    pub async fn unlink(
        pool: &PgPool,
        trip_id: DbId,
        destination_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM trip_destinations WHERE trip_id = $1 AND destination_id = $2")
                .bind(trip_id)
                .bind(destination_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Raw link rows for a trip, in the order they were added.
    pub async fn list_links(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<TripDestination>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trip_destinations WHERE trip_id = $1 ORDER BY id");
        sqlx::query_as::<_, TripDestination>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Destinations linked to a trip, in the order they were added.
    pub async fn list_destinations(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<Destination>, sqlx::Error> {
        sqlx::query_as::<_, Destination>(
            "SELECT d.id, d.name, d.country, d.region, d.description, d.image, \
                    d.status_id, d.priority_id, d.user_id, d.created_at, d.updated_at \
             FROM destinations d \
             JOIN trip_destinations td ON td.destination_id = d.id \
             WHERE td.trip_id = $1 \
             ORDER BY td.id",
        )
        .bind(trip_id)
        .fetch_all(pool)
        .await
    }
}
