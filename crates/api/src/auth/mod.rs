//! Credential handling for user accounts.

pub mod password;
