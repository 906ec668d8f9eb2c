//! Password hashing with Argon2id.
//!
//! Hashes are stored in PHC string format (`$argon2id$v=19$...`), which carries the
//! algorithm parameters and salt alongside the digest.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::internal::InternalError;

const SALT_LENGTH: usize = 16;

/// Hashes `password` with a freshly generated salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(InternalError::PasswordHashing)` - Salt or parameters rejected by argon2
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::from_b64(&generate_salt())
        .map_err(|source| InternalError::PasswordHashing { source })?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|source| InternalError::PasswordHashing { source })?;

    Ok(hash.to_string())
}

/// Checks `password` against a hash produced by `hash_password`.
///
/// Returns `false` for malformed stored hashes.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(hash) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

/// Alphanumeric salt, valid as the B64 salt of a PHC string.
fn generate_salt() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..SALT_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
