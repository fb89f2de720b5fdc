//! Shared domain layer for the Wayfarer travel planner.
//!
//! Holds the entity shapes, the insert/update schemas with their validation
//! rules, the seeded lookup values, and read-only dashboard aggregation.
//! Both the server and the client depend on this crate so that input is
//! judged by the same rules on either side of the wire.

pub mod dashboard;
pub mod error;
pub mod lookups;
pub mod schema;
pub mod types;
pub mod validation;
