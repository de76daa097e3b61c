use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::User;

/// Persistence contract for user accounts.
///
/// Lookups signal "missing" through `Option`/`bool` return values rather than
/// errors; the caller decides what a miss means at its boundary.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Option<User>;
    async fn get_by_username(&self, username: &str) -> Option<User>;
    /// All users, ordered by id.
    async fn get_all(&self) -> Vec<User>;
    /// Assigns the id and persists the user. Fails if the username is taken.
    async fn add(&self, user: User) -> Result<User, AppError>;
    /// Replaces the stored user. Returns `false` if the id is absent.
    async fn update(&self, user: User) -> bool;
    /// Returns `false` if the id is absent.
    async fn delete(&self, id: i32) -> bool;
}

struct UserMap {
    users: HashMap<i32, User>,
    next_id: i32,
}

/// In-memory implementation of [`UserStore`].
pub struct InMemoryUserStore {
    inner: RwLock<UserMap>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(UserMap {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_by_id(&self, id: i32) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned()
    }

    async fn get_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.values().find(|u| u.username == username).cloned()
    }

    async fn get_all(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    async fn add(&self, mut user: User) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.username == user.username) {
            return Err(AppError::BadRequest(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }

        user.id = inner.next_id;
        inner.next_id += 1;
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> bool {
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&user.id) {
            return false;
        }
        inner.users.insert(user.id, user);
        true
    }

    async fn delete(&self, id: i32) -> bool {
        let mut inner = self.inner.write().await;
        inner.users.remove(&id).is_some()
    }
}
