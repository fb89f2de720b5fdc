//! Repository for the `accommodations` table.

use sqlx::PgPool;
use wayfarer_core::schema::{Accommodation, CreateAccommodation, UpdateAccommodation};
use wayfarer_core::types::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, accommodation_type, destination_id, image, description, \
                       status_id, priority_id, notes, address, city, postal_code, user_id, \
                       created_at, updated_at";

/// Provides CRUD operations for accommodations.
pub struct AccommodationRepo;

impl AccommodationRepo {
    /// Insert a new accommodation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAccommodation,
    ) -> Result<Accommodation, sqlx::Error> {
        let query = format!(
            "INSERT INTO accommodations \
                (name, accommodation_type, destination_id, image, description, status_id, \
                 priority_id, notes, address, city, postal_code, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Accommodation>(&query)
            .bind(&input.name)
            .bind(&input.accommodation_type)
            .bind(input.destination_id)
            .bind(&input.image)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(&input.notes)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Accommodation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accommodations WHERE id = $1");
        sqlx::query_as::<_, Accommodation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all accommodations, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Accommodation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM accommodations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Accommodation>(&query).fetch_all(pool).await
    }

    /// List the places to stay at one destination, ordered by name.
    pub async fn list_by_destination(
        pool: &PgPool,
        destination_id: DbId,
    ) -> Result<Vec<Accommodation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accommodations WHERE destination_id = $1 ORDER BY name, id"
        );
        sqlx::query_as::<_, Accommodation>(&query)
            .bind(destination_id)
            .fetch_all(pool)
            .await
    }

    /// Update an accommodation. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAccommodation,
    ) -> Result<Option<Accommodation>, sqlx::Error> {
        let query = format!(
            "UPDATE accommodations SET \
                name = COALESCE($2, name), \
                accommodation_type = COALESCE($3, accommodation_type), \
                destination_id = COALESCE($4, destination_id), \
                image = COALESCE($5, image), \
                description = COALESCE($6, description), \
                status_id = COALESCE($7, status_id), \
                priority_id = COALESCE($8, priority_id), \
                notes = COALESCE($9, notes), \
                address = COALESCE($10, address), \
                city = COALESCE($11, city), \
                postal_code = COALESCE($12, postal_code), \
                user_id = COALESCE($13, user_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Accommodation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.accommodation_type)
            .bind(input.destination_id)
            .bind(&input.image)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.priority_id)
            .bind(&input.notes)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accommodations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
