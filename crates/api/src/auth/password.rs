//! Argon2id password hashing and the account password policy.
//!
//! Hashes are stored as PHC strings, so the salt and algorithm parameters
//! travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use wayfarer_core::validation::FieldErrors;

/// Hash a plaintext password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; a malformed stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Enforce the configured minimum length, counted in characters.
///
/// Violations are reported against the `password` field so they merge with
/// the schema's own field errors.
pub fn check_password_strength(password: &str, min_length: usize) -> Result<(), FieldErrors> {
    if password.trim().is_empty() {
        return Err(FieldErrors::single("password", "Password is required"));
    }
    if password.chars().count() < min_length {
        return Err(FieldErrors::single(
            "password",
            format!("Password must be at least {min_length} characters long"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("passport-stamp-42").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("passport-stamp-42", &hash).unwrap());
        assert!(!verify_password("passport-stamp-43", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn short_password_reports_field() {
        let errors = check_password_strength("short", 8).unwrap_err();
        assert_eq!(
            errors.get("password"),
            ["Password must be at least 8 characters long".to_string()]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Four characters, eight bytes.
        assert!(check_password_strength("éééé", 5).is_err());
        assert!(check_password_strength("éééé", 4).is_ok());
        assert!(check_password_strength("        ", 8).is_err());
        assert!(check_password_strength("exactly8", 8).is_ok());
    }
}
