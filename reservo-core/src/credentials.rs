use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::LazyLock;

use crate::{CoreError, CoreResult};

static CONTEXT: LazyLock<Argon2<'static>> = LazyLock::new(|| {
    Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2::Params::DEFAULT,
    )
});

/// Hash a password with a fresh random salt into a PHC string.
pub fn hash_password(password: &str) -> CoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = CONTEXT
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CoreError::CredentialError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check `password` against a stored PHC string. A mismatch is `Ok(false)`;
/// only an unreadable hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> CoreResult<bool> {
    let hash = PasswordHash::new(stored_hash)
        .map_err(|e| CoreError::CredentialError(format!("could not parse password hash: {}", e)))?;

    match CONTEXT.verify_password(password.as_bytes(), &hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoreError::CredentialError(e.to_string())),
    }
}
