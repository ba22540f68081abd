//! Password hashing and verification using Argon2id.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::{HrError, HrResult};

/// Hashes a plaintext password with Argon2id and a fresh random salt.
///
/// Returns the hash in PHC string format, which embeds the salt and
/// parameters needed for later verification.
pub fn hash_password(password: &str) -> HrResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HrError::store(format!("password hashing failed: {e}")))
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, or a store error
/// if the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> HrResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| HrError::store(format!("invalid stored hash: {e}")))?;

    let argon2 = Argon2::default();
    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HrError::store(format!("password verification failed: {e}"))),
    }
}
