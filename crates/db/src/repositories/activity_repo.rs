//! Repository for the `activities` table.

use sqlx::PgPool;
use wayfarer_core::schema::{Activity, CreateActivity, UpdateActivity};
use wayfarer_core::types::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category, destination_id, image, \
                       status_id, priority_id, address, city, postal_code, user_id, \
                       created_at, updated_at";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities \
                (name, description, category, destination_id, image, status_id, priority_id, \
                 address, city, postal_code, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.destination_id)
            .bind(&input.image)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all activities, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    /// List the activities planned at one destination, ordered by name.
    pub async fn list_by_destination(
        pool: &PgPool,
        destination_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities WHERE destination_id = $1 ORDER BY name, id"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(destination_id)
            .fetch_all(pool)
            .await
    }

    /// Update an activity. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                destination_id = COALESCE($5, destination_id), \
                image = COALESCE($6, image), \
                status_id = COALESCE($7, status_id), \
                priority_id = COALESCE($8, priority_id), \
                address = COALESCE($9, address), \
                city = COALESCE($10, city), \
                postal_code = COALESCE($11, postal_code), \
                user_id = COALESCE($12, user_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.destination_id)
            .bind(&input.image)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
