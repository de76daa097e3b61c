pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Role;

// Re-export necessary items
pub use extractors::AuthenticatedPrincipal;
pub use middleware::AuthMiddleware;
pub use password::{BcryptHasher, PasswordHasher};
pub use token::{generate_token, verify_token, Claims};

/// Represents the payload for a user login request.
///
/// Failures never say which half was wrong; the response is the same for an
/// unknown username and a wrong password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response structure after successful authentication.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The JWT (JSON Web Token) for session authentication.
    pub token: String,
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}
