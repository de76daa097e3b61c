use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::error::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::store::UserStore;

/// Account management and authentication over a [`UserStore`].
///
/// Plaintext passwords are digested before they reach the store; the store
/// never sees one. Authorization is the caller's concern (see `policy`).
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Looks up the user by username and checks the password against the
    /// stored digest. Returns `None` on any mismatch without revealing
    /// whether the username or the password was wrong.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        if let Some(user) = self.store.get_by_username(username).await {
            if self.hasher.verify(&user.password_hash, password)? {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    /// Digests the password and persists the new account. The returned user
    /// carries the digest; strip it with `UserDto` before exposing it.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, AppError> {
        let password_hash = self.hasher.hash(&request.password)?;
        let user = User {
            id: 0, // assigned by the store
            username: request.username,
            password_hash,
            email: request.email,
            role: request.role,
        };
        self.store.add(user).await
    }

    /// Applies email and role, and re-digests the password only when the
    /// request carries a non-empty value that differs from the stored digest.
    /// An empty or echoed-back password leaves the credential untouched.
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update(
        &self,
        id: i32,
        request: UpdateUserRequest,
    ) -> Result<Option<User>, AppError> {
        let Some(mut user) = self.store.get_by_id(id).await else {
            return Ok(None);
        };

        user.email = request.email;
        user.role = request.role;

        if let Some(password) = request.password.as_deref() {
            if !password.is_empty() && password != user.password_hash {
                user.password_hash = self.hasher.hash(password)?;
            }
        }

        self.store.update(user.clone()).await;
        Ok(Some(user))
    }

    pub async fn get_by_id(&self, id: i32) -> Option<User> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Vec<User> {
        self.store.get_all().await
    }

    /// Returns `false` if the user does not exist. Tasks assigned to the
    /// deleted user keep their assignee id; it simply matches no principal
    /// from then on.
    pub async fn delete(&self, id: i32) -> bool {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::store::InMemoryUserStore;

    /// Deterministic stand-in for bcrypt so tests stay fast.
    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash(&self, plaintext: &str) -> Result<String, AppError> {
            Ok(format!("digest:{}", plaintext))
        }

        fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, AppError> {
            Ok(digest == format!("digest:{}", plaintext))
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserStore::new()), Arc::new(StubHasher))
    }

    fn create_request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: format!("{}@example.com", username),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_create_digests_password() {
        let service = service();

        let user = service
            .create(create_request("alice", "plainPassword"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "plainPassword");

        let stored = service.get_by_id(user.id).await.unwrap();
        assert_eq!(stored.password_hash, "digest:plainPassword");
    }

    #[tokio::test]
    async fn test_authenticate_valid_credentials() {
        let service = service();
        let created = service
            .create(create_request("alice", "testpassword"))
            .await
            .unwrap();

        let result = service.authenticate("alice", "testpassword").await.unwrap();
        assert_eq!(result.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = service();
        service
            .create(create_request("alice", "testpassword"))
            .await
            .unwrap();

        let result = service.authenticate("alice", "wrongpassword").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_username() {
        let service = service();

        let result = service
            .authenticate("nonexistentuser", "testpassword")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_digest() {
        let service = service();
        let user = service
            .create(create_request("alice", "original"))
            .await
            .unwrap();
        let original_digest = user.password_hash.clone();

        let updated = service
            .update(
                user.id,
                UpdateUserRequest {
                    email: "new@example.com".to_string(),
                    role: Role::Admin,
                    password: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.password_hash, original_digest);
    }

    #[tokio::test]
    async fn test_update_with_empty_password_keeps_digest() {
        let service = service();
        let user = service
            .create(create_request("alice", "original"))
            .await
            .unwrap();
        let original_digest = user.password_hash.clone();

        let updated = service
            .update(
                user.id,
                UpdateUserRequest {
                    email: user.email.clone(),
                    role: user.role,
                    password: Some("".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.password_hash, original_digest);
    }

    #[tokio::test]
    async fn test_update_with_echoed_digest_does_not_rehash() {
        let service = service();
        let user = service
            .create(create_request("alice", "original"))
            .await
            .unwrap();
        let original_digest = user.password_hash.clone();

        // A client that reads the stored digest and sends it back unchanged
        // must not have it hashed again.
        let updated = service
            .update(
                user.id,
                UpdateUserRequest {
                    email: user.email.clone(),
                    role: user.role,
                    password: Some(original_digest.clone()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.password_hash, original_digest);
    }

    #[tokio::test]
    async fn test_update_with_new_password_rehashes() {
        let service = service();
        let user = service
            .create(create_request("alice", "original"))
            .await
            .unwrap();

        let updated = service
            .update(
                user.id,
                UpdateUserRequest {
                    email: user.email.clone(),
                    role: user.role,
                    password: Some("newpassword".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.password_hash, "digest:newpassword");

        let result = service.authenticate("alice", "newpassword").await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = service();

        let result = service
            .update(
                99,
                UpdateUserRequest {
                    email: "ghost@example.com".to_string(),
                    role: Role::User,
                    password: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let user = service
            .create(create_request("alice", "password"))
            .await
            .unwrap();

        assert!(service.delete(user.id).await);
        assert!(service.get_by_id(user.id).await.is_none());
        assert!(!service.delete(user.id).await);
    }
}
