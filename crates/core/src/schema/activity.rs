//! Activity entity and schemas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, LookupId, Timestamp};
use crate::validation::{trim, trim_opt, validate_image_url, InputSchema, Normalize};

/// A row from the `activities` table. Rows are deleted with their destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub destination_id: DbId,
    pub image: Option<String>,
    pub status_id: LookupId,
    pub priority_id: LookupId,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateActivity {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(range(min = 1, message = "Destination is required"))]
    pub destination_id: DbId,
    #[validate(custom(function = "validate_image_url"))]
    pub image: Option<String>,
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: LookupId,
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: LookupId,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Destination is required"))]
    pub destination_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_image_url"))]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

impl Normalize for CreateActivity {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim(&mut self.description);
        trim(&mut self.category);
        trim_opt(&mut self.image);
        trim_opt(&mut self.address);
        trim_opt(&mut self.city);
        trim_opt(&mut self.postal_code);
    }
}

impl Normalize for UpdateActivity {
    fn normalize(&mut self) {
        trim_opt(&mut self.name);
        trim_opt(&mut self.description);
        trim_opt(&mut self.category);
        trim_opt(&mut self.image);
        trim_opt(&mut self.address);
        trim_opt(&mut self.city);
        trim_opt(&mut self.postal_code);
    }
}

impl InputSchema for CreateActivity {}
impl InputSchema for UpdateActivity {}

impl From<&Activity> for CreateActivity {
    fn from(a: &Activity) -> Self {
        Self {
            name: a.name.clone(),
            description: a.description.clone(),
            category: a.category.clone(),
            destination_id: a.destination_id,
            image: a.image.clone(),
            status_id: a.status_id,
            priority_id: a.priority_id,
            address: a.address.clone(),
            city: a.city.clone(),
            postal_code: a.postal_code.clone(),
            user_id: a.user_id,
        }
    }
}
