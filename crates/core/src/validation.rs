//! Input validation shared by the server and the client.
//!
//! Schemas derive [`validator::Validate`] for their per-field rules. This
//! module adds the pieces `validator` does not cover:
//!
//! - [`Normalize`], which trims text before it is judged;
//! - [`FieldErrors`], the field-keyed error map sent over the wire;
//! - custom rules (image URLs);
//! - identifier checks for `get`/`update`/`delete`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::error::InvalidId;
use crate::types::DbId;

/// Key `validator` uses for errors raised by struct-level (schema) rules.
const SCHEMA_ERRORS_KEY: &str = "__all__";

/// Param that lets a struct-level rule attach its error to a specific field.
const FIELD_PARAM: &str = "field";

// ---------------------------------------------------------------------------
// Field-error map
// ---------------------------------------------------------------------------

/// Field name (camelCase, as sent on the wire) to human-readable messages.
///
/// Serializes as `{"name": ["Name is required"], ...}`. Ordered so that
/// responses and test assertions are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Build a map holding a single message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded for `field`, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Merge another map into this one, appending messages per field.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Convert `validator` output into wire-keyed messages.
    ///
    /// Every violated field is reported. Struct-level errors land on the
    /// field named by their `field` param, or on `_root` without one.
    pub fn from_validation<S: InputSchema>(errors: &ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors.iter() {
                let target = if field == SCHEMA_ERRORS_KEY {
                    error
                        .params
                        .get(FIELD_PARAM)
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| "_root".to_string())
                } else {
                    S::wire_name(&field)
                };
                out.add(target, message_for(error));
            }
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

fn message_for(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Invalid value ({})", error.code),
    }
}

// ---------------------------------------------------------------------------
// Schema traits
// ---------------------------------------------------------------------------

/// Canonicalize raw input before validation (trim text fields).
pub trait Normalize {
    fn normalize(&mut self);
}

/// An insert or update payload judged by [`validate_input`].
pub trait InputSchema: Validate + Normalize {
    /// Wire name for a Rust field name. Defaults to camelCase, matching the
    /// `#[serde(rename_all = "camelCase")]` on every schema.
    fn wire_name(field: &str) -> String {
        to_camel_case(field)
    }
}

/// Normalize then validate `input`, returning the cleaned value or every
/// violated field.
pub fn validate_input<T: InputSchema>(mut input: T) -> Result<T, FieldErrors> {
    input.normalize();
    match input.validate() {
        Ok(()) => Ok(input),
        Err(errors) => Err(FieldErrors::from_validation::<T>(&errors)),
    }
}

/// Validate without consuming, for live field feedback in forms.
pub fn check_input<T: InputSchema + Clone>(input: &T) -> FieldErrors {
    match validate_input(input.clone()) {
        Ok(_) => FieldErrors::new(),
        Err(errors) => errors,
    }
}

/// `start_date` → `startDate`.
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

pub(crate) fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

pub(crate) fn trim_opt(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        trim(v);
    }
}

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

/// Build a [`ValidationError`] carrying a message.
pub fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Struct-level rule error that should be reported against `field`.
pub fn field_rule_error(
    code: &'static str,
    field: &'static str,
    message: &'static str,
) -> ValidationError {
    let mut error = rule_error(code, message);
    error.add_param(Cow::Borrowed(FIELD_PARAM), &field);
    error
}

/// Images are optional in most schemas: the empty string is accepted, any
/// other value must be an absolute `http(s)` URL.
pub fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_http_url(value) {
        Ok(())
    } else {
        Err(rule_error("url", "Image must be a valid URL"))
    }
}

/// Same rule as [`validate_image_url`] for profile avatars.
pub fn validate_avatar_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_http_url(value) {
        Ok(())
    } else {
        Err(rule_error("url", "Avatar must be a valid URL"))
    }
}

fn is_http_url(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://")) && value.validate_url()
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Anything a caller may hand to `get`/`update`/`delete` as an identifier.
///
/// Conversion fails with [`InvalidId`] for non-numeric or
/// non-positive values, so callers can reject them before any I/O.
pub trait IntoDbId {
    fn into_db_id(self) -> Result<DbId, InvalidId>;
}

impl IntoDbId for DbId {
    fn into_db_id(self) -> Result<DbId, InvalidId> {
        ensure_positive_id(self)
    }
}

impl IntoDbId for i32 {
    fn into_db_id(self) -> Result<DbId, InvalidId> {
        ensure_positive_id(DbId::from(self))
    }
}

impl IntoDbId for &str {
    fn into_db_id(self) -> Result<DbId, InvalidId> {
        parse_id(self)
    }
}

impl IntoDbId for String {
    fn into_db_id(self) -> Result<DbId, InvalidId> {
        parse_id(&self)
    }
}

/// Check an identifier before any I/O is attempted on its behalf.
pub fn validate_id<I: IntoDbId>(id: I) -> Result<DbId, InvalidId> {
    id.into_db_id()
}

/// Reject ids that cannot name a row.
pub fn ensure_positive_id(id: DbId) -> Result<DbId, InvalidId> {
    if id > 0 {
        Ok(id)
    } else {
        Err(InvalidId(id.to_string()))
    }
}

/// Parse a textual id (e.g. a route segment).
pub fn parse_id(raw: &str) -> Result<DbId, InvalidId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| InvalidId(raw.to_string()))
        .and_then(ensure_positive_id)
}
