//! Accommodation entity and schemas.
//!
//! The wire name of the kind column is `type`; in Rust it is
//! `accommodation_type` so it can be bound and derived without raw identifiers.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, LookupId, Timestamp};
use crate::validation::{
    to_camel_case, trim, trim_opt, validate_image_url, InputSchema, Normalize,
};

/// A row from the `accommodations` table. Rows are deleted with their destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub accommodation_type: String,
    pub destination_id: DbId,
    pub image: Option<String>,
    pub description: String,
    pub status_id: LookupId,
    pub priority_id: LookupId,
    pub notes: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccommodation {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub accommodation_type: String,
    #[validate(range(min = 1, message = "Destination is required"))]
    pub destination_id: DbId,
    #[validate(custom(function = "validate_image_url"))]
    pub image: Option<String>,
    pub description: String,
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: LookupId,
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: LookupId,
    pub notes: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccommodation {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub accommodation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Destination is required"))]
    pub destination_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_image_url"))]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
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

fn accommodation_wire_name(field: &str) -> String {
    match field {
        "accommodation_type" => "type".to_string(),
        other => to_camel_case(other),
    }
}

impl Normalize for CreateAccommodation {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim(&mut self.accommodation_type);
        trim_opt(&mut self.image);
        trim(&mut self.description);
        trim_opt(&mut self.notes);
        trim_opt(&mut self.address);
        trim_opt(&mut self.city);
        trim_opt(&mut self.postal_code);
    }
}

impl Normalize for UpdateAccommodation {
    fn normalize(&mut self) {
        trim_opt(&mut self.name);
        trim_opt(&mut self.accommodation_type);
        trim_opt(&mut self.image);
        trim_opt(&mut self.description);
        trim_opt(&mut self.notes);
        trim_opt(&mut self.address);
        trim_opt(&mut self.city);
        trim_opt(&mut self.postal_code);
    }
}

impl InputSchema for CreateAccommodation {
    fn wire_name(field: &str) -> String {
        accommodation_wire_name(field)
    }
}

impl InputSchema for UpdateAccommodation {
    fn wire_name(field: &str) -> String {
        accommodation_wire_name(field)
    }
}

impl From<&Accommodation> for CreateAccommodation {
    fn from(a: &Accommodation) -> Self {
        Self {
            name: a.name.clone(),
            accommodation_type: a.accommodation_type.clone(),
            destination_id: a.destination_id,
            image: a.image.clone(),
            description: a.description.clone(),
            status_id: a.status_id,
            priority_id: a.priority_id,
            notes: a.notes.clone(),
            address: a.address.clone(),
            city: a.city.clone(),
            postal_code: a.postal_code.clone(),
            user_id: a.user_id,
        }
    }
}
