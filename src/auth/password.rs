use crate::error::AppError;

/// One-way digest contract for credential storage.
///
/// `verify(hash(x), x)` must hold for all `x`. The concrete algorithm stays
/// behind this trait so it can be swapped without touching the services.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;
    fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, AppError>;
}

/// Production hasher backed by bcrypt.
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, 12) // bcrypt default cost is 12
            .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, AppError> {
        bcrypt::verify(plaintext, digest)
            .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
    }
}
