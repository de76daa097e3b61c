use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Role of a user account.
///
/// A closed enumeration so authorization checks stay exhaustive. Serialized
/// as `"Admin"` / `"User"` to match the API's JSON representation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full access: manages users and tasks.
    Admin,
    /// Regular account: sees and progresses assigned tasks.
    User,
}

/// A user account as held by the store.
///
/// `password_hash` is the one-way digest of the password. It never leaves
/// the service layer; outward responses use [`UserDto`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub role: Role,
}

/// Outward representation of a user. Carries no credential material.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Payload for creating a user (admin operation).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Must be between 3 and 32 characters, alphanumeric, underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    pub role: Role,
}

/// Payload for updating a user (admin operation).
///
/// The username is immutable after creation and is therefore absent here.
/// An empty or missing password leaves the stored digest untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_user_request_validation() {
        let valid = CreateUserRequest {
            username: "test_user-123".to_string(),
            password: "password123".to_string(),
            email: "test@example.com".to_string(),
            role: Role::User,
        };
        assert!(valid.validate().is_ok());

        let bad_username = CreateUserRequest {
            username: "test user!".to_string(), // Contains space and exclamation
            password: "password123".to_string(),
            email: "test@example.com".to_string(),
            role: Role::User,
        };
        assert!(bad_username.validate().is_err());

        let short_password = CreateUserRequest {
            username: "testuser".to_string(),
            password: "short".to_string(),
            email: "test@example.com".to_string(),
            role: Role::User,
        };
        assert!(short_password.validate().is_err());

        let bad_email = CreateUserRequest {
            username: "testuser".to_string(),
            password: "password123".to_string(),
            email: "not-an-email".to_string(),
            role: Role::Admin,
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"User\"");

        let role: Role = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_user_dto_strips_digest() {
        let user = User {
            id: 7,
            username: "carol".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            email: "carol@example.com".to_string(),
            role: Role::User,
        };

        let dto = UserDto::from(&user);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["username"], "carol");
        assert!(json.get("password_hash").is_none());
    }
}
