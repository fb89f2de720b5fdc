//! Repository for the `destinations` table.

use sqlx::PgPool;
use wayfarer_core::schema::{CreateDestination, Destination, UpdateDestination};
use wayfarer_core::types::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country, region, description, image, \
                       status_id, priority_id, user_id, created_at, updated_at";

/// Provides CRUD operations for destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Insert a new destination, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDestination,
    ) -> Result<Destination, sqlx::Error> {
        let query = format!(
            "INSERT INTO destinations \
                (name, country, region, description, image, status_id, priority_id, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.region)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a destination by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations WHERE id = $1");
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all destinations, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Destination>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM destinations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Destination>(&query).fetch_all(pool).await
    }

    /// Update a destination. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDestination,
    ) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!(
            "UPDATE destinations SET \
                name = COALESCE($2, name), \
                country = COALESCE($3, country), \
                region = COALESCE($4, region), \
                description = COALESCE($5, description), \
                image = COALESCE($6, image), \
                status_id = COALESCE($7, status_id), \
                priority_id = COALESCE($8, priority_id), \
                user_id = COALESCE($9, user_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.region)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a destination. Its activities, accommodations and trip
    /// links go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all destinations (dashboard).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM destinations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
