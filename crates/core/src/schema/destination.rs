//! Destination entity and schemas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, LookupId, Timestamp};
use crate::validation::{trim, trim_opt, validate_image_url, InputSchema, Normalize};

/// A row from the `destinations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub region: String,
    pub description: String,
    pub image: String,
    pub status_id: LookupId,
    pub priority_id: LookupId,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert schema for a destination. `image` is required here, unlike the
/// other entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDestination {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    pub description: String,
    #[validate(
        length(min = 1, message = "Image is required"),
        custom(function = "validate_image_url")
    )]
    pub image: String,
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: LookupId,
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: LookupId,
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

/// Partial update schema for a destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "Image is required"),
        custom(function = "validate_image_url")
    )]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

impl Normalize for CreateDestination {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim(&mut self.country);
        trim(&mut self.region);
        trim(&mut self.description);
        trim(&mut self.image);
    }
}

impl Normalize for UpdateDestination {
    fn normalize(&mut self) {
        trim_opt(&mut self.name);
        trim_opt(&mut self.country);
        trim_opt(&mut self.region);
        trim_opt(&mut self.description);
        trim_opt(&mut self.image);
    }
}

impl InputSchema for CreateDestination {}
impl InputSchema for UpdateDestination {}

impl From<&Destination> for CreateDestination {
    /// Seed an edit form from an existing row.
    fn from(d: &Destination) -> Self {
        Self {
            name: d.name.clone(),
            country: d.country.clone(),
            region: d.region.clone(),
            description: d.description.clone(),
            image: d.image.clone(),
            status_id: d.status_id,
            priority_id: d.priority_id,
            user_id: d.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    fn paris() -> CreateDestination {
        CreateDestination {
            name: "Paris".into(),
            country: "France".into(),
            region: "Europe".into(),
            image: "https://x/1.jpg".into(),
            status_id: 1,
            priority_id: 1,
            ..Default::default()
        }
    }

    #[test]
    fn valid_destination_passes() {
        let input = validate_input(paris()).unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn empty_default_reports_every_required_field() {
        let errors = validate_input(CreateDestination::default()).unwrap_err();
        for field in ["name", "country", "region", "image", "statusId", "priorityId"] {
            assert!(errors.contains(field), "expected error on {field}: {errors}");
        }
        assert!(!errors.contains("description"));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let input = CreateDestination {
            name: "   ".into(),
            ..paris()
        };
        let errors = validate_input(input).unwrap_err();
        assert_eq!(errors.get("name"), ["Name is required".to_string()]);
    }

    #[test]
    fn malformed_image_is_rejected() {
        let input = CreateDestination {
            image: "not-a-url".into(),
            ..paris()
        };
        let errors = validate_input(input).unwrap_err();
        assert_eq!(errors.get("image"), ["Image must be a valid URL".to_string()]);
    }

    #[test]
    fn missing_fields_deserialize_to_empty_defaults() {
        let input: CreateDestination = serde_json::from_str(r#"{"name":"Rome"}"#).unwrap();
        assert_eq!(input.country, "");
        assert_eq!(input.status_id, 0);
    }

    #[test]
    fn partial_update_checks_only_present_fields() {
        let update = UpdateDestination {
            name: Some("X".into()),
            ..Default::default()
        };
        assert!(validate_input(update).is_ok());

        let bad = UpdateDestination {
            status_id: Some(0),
            image: Some("nope".into()),
            ..Default::default()
        };
        let errors = validate_input(bad).unwrap_err();
        assert!(errors.contains("statusId"));
        assert!(errors.contains("image"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn update_omits_absent_fields_on_the_wire() {
        let update = UpdateDestination {
            name: Some("X".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"name": "X"})
        );
    }
}
