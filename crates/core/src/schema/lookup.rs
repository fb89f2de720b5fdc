//! `travel_statuses` and `travel_priority_levels` lookup rows.
//!
//! Both tables share one shape, so one row type and one pair of schemas
//! serve both.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::LookupId;
use crate::validation::{rule_error, trim, trim_opt, InputSchema, Normalize};

/// A row from `travel_statuses` or `travel_priority_levels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LookupEntry {
    pub id: LookupId,
    pub label: String,
    pub description: Option<String>,
    pub colour: Option<String>,
}

pub type TravelStatus = LookupEntry;
pub type TravelPriorityLevel = LookupEntry;

/// Insert schema for a lookup row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLookup {
    #[validate(length(min = 1, max = 50, message = "Label is required (max 50 characters)"))]
    pub label: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_colour"))]
    pub colour: Option<String>,
}

/// Partial update schema for a lookup row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLookup {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "Label is required (max 50 characters)"))]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_colour"))]
    pub colour: Option<String>,
}

/// Colours are CSS hex notation: `#rgb` or `#rrggbb`. Empty means "none".
pub fn validate_colour(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let hex = value.strip_prefix('#').unwrap_or("");
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(rule_error("colour", "Colour must be a hex value such as #1e90ff"))
    }
}

impl Normalize for CreateLookup {
    fn normalize(&mut self) {
        trim(&mut self.label);
        trim_opt(&mut self.description);
        trim_opt(&mut self.colour);
    }
}

impl Normalize for UpdateLookup {
    fn normalize(&mut self) {
        trim_opt(&mut self.label);
        trim_opt(&mut self.description);
        trim_opt(&mut self.colour);
    }
}

impl InputSchema for CreateLookup {}
impl InputSchema for UpdateLookup {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    #[test]
    fn colour_accepts_short_and_long_hex() {
        assert!(validate_colour("#fff").is_ok());
        assert!(validate_colour("#1E90FF").is_ok());
        assert!(validate_colour("").is_ok());
    }

    #[test]
    fn colour_rejects_names_and_bad_hex() {
        assert!(validate_colour("blue").is_err());
        assert!(validate_colour("#12345").is_err());
        assert!(validate_colour("#gggggg").is_err());
    }

    #[test]
    fn label_is_trimmed_then_required() {
        let input = CreateLookup {
            label: "   ".into(),
            ..Default::default()
        };
        let errors = validate_input(input).unwrap_err();
        assert!(errors.contains("label"));

        let ok = validate_input(CreateLookup {
            label: "  on_hold ".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(ok.label, "on_hold");
    }
}
