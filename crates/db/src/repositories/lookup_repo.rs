//! Repository for the `travel_statuses` and `travel_priority_levels` tables.

use sqlx::PgPool;
use wayfarer_core::schema::{CreateLookup, LookupEntry, UpdateLookup};
use wayfarer_core::types::LookupId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, description, colour";

/// The two lookup tables sharing the [`LookupEntry`] shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    Statuses,
    PriorityLevels,
}

impl LookupTable {
    pub fn table_name(self) -> &'static str {
        match self {
            LookupTable::Statuses => "travel_statuses",
            LookupTable::PriorityLevels => "travel_priority_levels",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            LookupTable::Statuses => "TravelStatus",
            LookupTable::PriorityLevels => "TravelPriorityLevel",
        }
    }
}

/// Provides CRUD operations for lookup rows.
pub struct LookupRepo;

impl LookupRepo {
    /// List all rows ordered by id (seed order).
    pub async fn list(pool: &PgPool, table: LookupTable) -> Result<Vec<LookupEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY id", table.table_name());
        sqlx::query_as::<_, LookupEntry>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        table: LookupTable,
        id: LookupId,
    ) -> Result<Option<LookupEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", table.table_name());
        sqlx::query_as::<_, LookupEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new row. Fails with a unique violation on a duplicate label.
    pub async fn create(
        pool: &PgPool,
        table: LookupTable,
        input: &CreateLookup,
    ) -> Result<LookupEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (label, description, colour) \
             VALUES ($1, $2, NULLIF($3, '')) \
             RETURNING {COLUMNS}",
            table.table_name()
        );
        sqlx::query_as::<_, LookupEntry>(&query)
            .bind(&input.label)
            .bind(&input.description)
            .bind(&input.colour)
            .fetch_one(pool)
            .await
    }

    /// Update a row. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        table: LookupTable,
        id: LookupId,
        input: &UpdateLookup,
    ) -> Result<Option<LookupEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET \
                label = COALESCE($2, label), \
                description = COALESCE($3, description), \
                colour = COALESCE(NULLIF($4, ''), colour) \
             WHERE id = $1 \
             RETURNING {COLUMNS}",
            table.table_name()
        );
        sqlx::query_as::<_, LookupEntry>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.description)
            .bind(&input.colour)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Rejected by the database (`23503`) while any trip,
    /// destination, activity or accommodation still references it.
    pub async fn delete(pool: &PgPool, table: LookupTable, id: LookupId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", table.table_name());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
