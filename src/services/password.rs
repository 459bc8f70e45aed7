// src/services/password.rs
// DOCUMENTATION: Argon2id password hashing for user accounts

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{rngs::OsRng, RngCore};

use crate::errors::GalleryError;

/// Hash a plaintext password into a PHC string
pub fn hash_password(password: &str) -> Result<String, GalleryError> {
    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        log::error!("Salt encoding failed: {}", e);
        GalleryError::InternalError
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            log::error!("Password hashing failed: {}", e);
            GalleryError::InternalError
        })
}

/// Check a plaintext password against a stored PHC string
///
/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password(":LSKDjfsd89s").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(":LSKDjfsd89s", &hash));
        assert!(!verify_password("wrong_password", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
