//! Repository for the `user_preferences` table.

use sqlx::PgPool;
use wayfarer_core::schema::{UpdatePreferences, UserPreferences};
use wayfarer_core::types::DbId;

const COLUMNS: &str = "id, user_id, currency, distance_unit, date_format, email_notifications, \
                       theme, created_at, updated_at";

/// Reads and upserts the single preferences row per user.
pub struct PreferencesRepo;

impl PreferencesRepo {
    /// Fetch a user's preferences, if they have ever been saved.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserPreferences>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1");
        sqlx::query_as::<_, UserPreferences>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a user's preferences, creating the default row on first access.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<UserPreferences, sqlx::Error> {
        Self::upsert(pool, user_id, &UpdatePreferences::default()).await
    }

    /// Insert or update a user's preferences. Absent fields keep the stored
    /// value, or the column default on first write.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdatePreferences,
    ) -> Result<UserPreferences, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_preferences \
                (user_id, currency, distance_unit, date_format, email_notifications, theme) \
             VALUES ($1, COALESCE($2, 'USD'), COALESCE($3, 'km'), COALESCE($4, 'YYYY-MM-DD'), \
                     COALESCE($5, TRUE), COALESCE($6, 'system')) \
             ON CONFLICT ON CONSTRAINT uq_user_preferences_user DO UPDATE SET \
                currency = COALESCE($2, user_preferences.currency), \
                distance_unit = COALESCE($3, user_preferences.distance_unit), \
                date_format = COALESCE($4, user_preferences.date_format), \
                email_notifications = COALESCE($5, user_preferences.email_notifications), \
                theme = COALESCE($6, user_preferences.theme) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserPreferences>(&query)
            .bind(user_id)
            .bind(&input.currency)
            .bind(&input.distance_unit)
            .bind(&input.date_format)
            .bind(input.email_notifications)
            .bind(&input.theme)
            .fetch_one(pool)
            .await
    }
}
