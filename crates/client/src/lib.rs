//! Typed async client for the Wayfarer API.
//!
//! - [`WayfarerClient`] owns the HTTP connection pool and a shared
//!   [`QueryCache`].
//! - [`EntityHooks`] give list/get/create/update/delete per entity,
//!   validating input locally before any request is sent.
//! - [`Form`] drives an edit-validate-submit cycle over any insert or update
//!   schema.

pub mod cache;
pub mod config;
pub mod error;
pub mod form;
pub mod hooks;
pub mod resource;

pub use cache::{QueryCache, QueryKey};
pub use config::ClientConfig;
pub use error::ClientError;
pub use form::{ActivityForm, Form, FormState, Submit, SubmitOutcome};
pub use hooks::{EntityHooks, WayfarerClient};
pub use resource::{Accommodations, Activities, Destinations, Resource, Trips};
