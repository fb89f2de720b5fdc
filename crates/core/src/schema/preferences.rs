//! Per-user preferences (currency, units, display), persisted server-side.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{DbId, Timestamp};
use crate::validation::{rule_error, trim_opt, InputSchema, Normalize};

pub const DISTANCE_UNITS: &[&str] = &["km", "mi"];
pub const THEMES: &[&str] = &["light", "dark", "system"];

/// A row from the `user_preferences` table (one per user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: DbId,
    pub user_id: DbId,
    pub currency: String,
    pub distance_unit: String,
    pub date_format: String,
    pub email_notifications: bool,
    pub theme: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `PUT /api/users/{id}/preferences`. Absent fields keep their
/// stored (or default) value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_currency"))]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_distance_unit"))]
    pub distance_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 32, message = "Date format is required"))]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_theme"))]
    pub theme: Option<String>,
}

/// ISO 4217 shape: three uppercase ASCII letters.
fn validate_currency(value: &str) -> Result<(), ValidationError> {
    if value.len() == 3 && value.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(rule_error("currency", "Currency must be a 3-letter ISO code"))
    }
}

fn validate_distance_unit(value: &str) -> Result<(), ValidationError> {
    if DISTANCE_UNITS.contains(&value) {
        Ok(())
    } else {
        Err(rule_error("distance_unit", "Distance unit must be km or mi"))
    }
}

fn validate_theme(value: &str) -> Result<(), ValidationError> {
    if THEMES.contains(&value) {
        Ok(())
    } else {
        Err(rule_error("theme", "Theme must be light, dark or system"))
    }
}

impl Normalize for UpdatePreferences {
    fn normalize(&mut self) {
        trim_opt(&mut self.currency);
        if let Some(currency) = self.currency.as_mut() {
            currency.make_ascii_uppercase();
        }
        trim_opt(&mut self.distance_unit);
        trim_opt(&mut self.date_format);
        trim_opt(&mut self.theme);
    }
}

impl InputSchema for UpdatePreferences {}
