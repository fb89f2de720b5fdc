//! Errors surfaced by the client, and decoding of server error bodies.

use std::collections::BTreeMap;

use serde::Deserialize;
use wayfarer_core::error::InvalidId;
use wayfarer_core::validation::FieldErrors;

/// Everything a hook call can fail with.
///
/// `Validation` and `InvalidId` are raised locally and mean no request was
/// sent. `Transport` means the request never got a response. `Server` wraps
/// any non-2xx response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        /// Present when the server pinned the failure to fields.
        field_errors: Option<FieldErrors>,
    },
}

impl ClientError {
    /// Field errors from either local validation or a structured server
    /// response.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            ClientError::Server {
                field_errors: Some(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }

    /// True when the error was raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::Validation(_) | ClientError::InvalidId(_))
    }

    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Build a [`ClientError::Server`] from a non-2xx response.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let fallback = status.canonical_reason().unwrap_or("Request failed");
        parse_error_body(status.as_u16(), &body, fallback)
    }
}

impl From<InvalidId> for ClientError {
    fn from(err: InvalidId) -> Self {
        ClientError::InvalidId(err.0)
    }
}

impl From<FieldErrors> for ClientError {
    fn from(errors: FieldErrors) -> Self {
        ClientError::Validation(errors)
    }
}

/// A single message or a list of messages per field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Messages {
    One(String),
    Many(Vec<String>),
}

/// Error body shape. The server sends `error` and `fieldErrors`; `message`
/// and `errors` are accepted as aliases.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: Option<String>,
    #[serde(rename = "fieldErrors", alias = "errors")]
    field_errors: Option<BTreeMap<String, Messages>>,
}

fn parse_error_body(status: u16, body: &str, fallback: &str) -> ClientError {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        let message = if body.trim().is_empty() {
            fallback.to_string()
        } else {
            body.trim().to_string()
        };
        return ClientError::Server {
            status,
            message,
            field_errors: None,
        };
    };

    let field_errors = parsed.field_errors.map(|map| {
        let mut errors = FieldErrors::new();
        for (field, messages) in map {
            match messages {
                Messages::One(message) => errors.add(field.as_str(), message),
                Messages::Many(list) => {
                    for message in list {
                        errors.add(field.as_str(), message);
                    }
                }
            }
        }
        errors
    });

    ClientError::Server {
        status,
        message: parsed.error.unwrap_or_else(|| fallback.to_string()),
        field_errors: field_errors.filter(|e| !e.is_empty()),
    }
}
