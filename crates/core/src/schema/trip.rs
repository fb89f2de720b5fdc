//! Trip entity and schemas.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{Date, DbId, LookupId, Timestamp};
use crate::validation::{
    field_rule_error, trim, trim_opt, validate_image_url, InputSchema, Normalize,
};

/// A row from the `trips` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status_id: LookupId,
    pub priority_id: LookupId,
    pub image: Option<String>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert schema for a trip. Dates are `Option` so an empty form can be
/// represented; both are required to pass validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_create_dates", skip_on_field_errors = false))]
pub struct CreateTrip {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<Date>,
    #[validate(required(message = "End date is required"))]
    pub end_date: Option<Date>,
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: LookupId,
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: LookupId,
    #[validate(custom(function = "validate_image_url"))]
    pub image: Option<String>,
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

/// Partial update schema. The date-order rule only applies when both dates
/// are present; otherwise the `ck_trips_date_order` constraint decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dates", skip_on_field_errors = false))]
pub struct UpdateTrip {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Status is required"))]
    pub status_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Priority is required"))]
    pub priority_id: Option<LookupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_image_url"))]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: Option<DbId>,
}

fn check_date_order(start: Option<Date>, end: Option<Date>) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(field_rule_error(
            "date_order",
            "endDate",
            "End date must be on or after the start date",
        )),
        _ => Ok(()),
    }
}

fn validate_create_dates(trip: &CreateTrip) -> Result<(), ValidationError> {
    check_date_order(trip.start_date, trip.end_date)
}

fn validate_update_dates(trip: &UpdateTrip) -> Result<(), ValidationError> {
    check_date_order(trip.start_date, trip.end_date)
}

impl Normalize for CreateTrip {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim(&mut self.description);
        trim_opt(&mut self.image);
    }
}

impl Normalize for UpdateTrip {
    fn normalize(&mut self) {
        trim_opt(&mut self.name);
        trim_opt(&mut self.description);
        trim_opt(&mut self.image);
    }
}

impl InputSchema for CreateTrip {}
impl InputSchema for UpdateTrip {}

impl From<&Trip> for CreateTrip {
    fn from(t: &Trip) -> Self {
        Self {
            name: t.name.clone(),
            description: t.description.clone(),
            start_date: Some(t.start_date),
            end_date: Some(t.end_date),
            status_id: t.status_id,
            priority_id: t.priority_id,
            image: t.image.clone(),
            user_id: t.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn summer() -> CreateTrip {
        CreateTrip {
            name: "Summer in France".into(),
            start_date: Some(date(2027, 7, 1)),
            end_date: Some(date(2027, 7, 14)),
            status_id: 2,
            priority_id: 3,
            ..Default::default()
        }
    }

    #[test]
    fn valid_trip_passes() {
        assert!(validate_input(summer()).is_ok());
    }

    #[test]
    fn each_required_field_is_reported_when_omitted() {
        let cases: [(&str, fn(&mut CreateTrip)); 5] = [
            ("name", |t| t.name.clear()),
            ("startDate", |t| t.start_date = None),
            ("endDate", |t| t.end_date = None),
            ("statusId", |t| t.status_id = 0),
            ("priorityId", |t| t.priority_id = 0),
        ];
        for (field, omit) in cases {
            let mut input = summer();
            omit(&mut input);
            let errors = validate_input(input).unwrap_err();
            assert!(errors.contains(field), "expected error on {field}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn same_day_trip_is_allowed() {
        let input = CreateTrip {
            end_date: Some(date(2027, 7, 1)),
            ..summer()
        };
        assert!(validate_input(input).is_ok());
    }

    #[test]
    fn end_before_start_is_reported_on_end_date() {
        let input = CreateTrip {
            end_date: Some(date(2027, 6, 30)),
            ..summer()
        };
        let errors = validate_input(input).unwrap_err();
        assert_eq!(
            errors.get("endDate"),
            ["End date must be on or after the start date".to_string()]
        );
    }

    #[test]
    fn date_order_is_reported_alongside_field_errors() {
        let input = CreateTrip {
            name: String::new(),
            end_date: Some(date(2027, 6, 30)),
            ..summer()
        };
        let errors = validate_input(input).unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("endDate"));
    }

    #[test]
    fn missing_dates_are_required() {
        let errors = validate_input(CreateTrip::default()).unwrap_err();
        assert!(errors.contains("startDate"));
        assert!(errors.contains("endDate"));
    }

    #[test]
    fn dates_use_iso_format_on_the_wire() {
        let json = serde_json::to_value(summer()).unwrap();
        assert_eq!(json["startDate"], "2027-07-01");
    }

    #[test]
    fn update_with_one_date_skips_order_rule() {
        let update = UpdateTrip {
            end_date: Some(date(2000, 1, 1)),
            ..Default::default()
        };
        assert!(validate_input(update).is_ok());
    }
}
