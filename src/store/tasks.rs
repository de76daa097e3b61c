use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::Task;

/// Persistence contract for tasks.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Option<Task>;
    /// All tasks, ordered by id.
    async fn get_all(&self) -> Vec<Task>;
    /// Tasks whose assignee is `user_id`, ordered by id.
    async fn get_by_assigned_user(&self, user_id: i32) -> Vec<Task>;
    /// Assigns the id and persists the task.
    async fn add(&self, task: Task) -> Task;
    /// Replaces the stored task. Returns `false` if the id is absent.
    async fn update(&self, task: Task) -> bool;
    /// Returns `false` if the id is absent.
    async fn delete(&self, id: i32) -> bool;
}

struct TaskMap {
    tasks: HashMap<i32, Task>,
    next_id: i32,
}

/// In-memory implementation of [`TaskStore`].
pub struct InMemoryTaskStore {
    inner: RwLock<TaskMap>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TaskMap {
                tasks: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get_by_id(&self, id: i32) -> Option<Task> {
        let inner = self.inner.read().await;
        inner.tasks.get(&id).cloned()
    }

    async fn get_all(&self) -> Vec<Task> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner.tasks.values().cloned().collect();
        tasks.sort_by_key(|t| t.id);
        tasks
    }

    async fn get_by_assigned_user(&self, user_id: i32) -> Vec<Task> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner
            .tasks
            .values()
            .filter(|t| t.assigned_user_id == Some(user_id))
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.id);
        tasks
    }

    async fn add(&self, mut task: Task) -> Task {
        let mut inner = self.inner.write().await;
        task.id = inner.next_id;
        inner.next_id += 1;
        inner.tasks.insert(task.id, task.clone());
        task
    }

    async fn update(&self, task: Task) -> bool {
        let mut inner = self.inner.write().await;
        if !inner.tasks.contains_key(&task.id) {
            return false;
        }
        inner.tasks.insert(task.id, task);
        true
    }

    async fn delete(&self, id: i32) -> bool {
        let mut inner = self.inner.write().await;
        inner.tasks.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use chrono::Utc;

    fn sample_task(assigned_user_id: Option<i32>) -> Task {
        Task {
            id: 0,
            title: "Test Task".to_string(),
            description: "Test Description".to_string(),
            due_date: Utc::now(),
            status: TaskStatus::Pending,
            assigned_user_id,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_increasing_ids() {
        let store = InMemoryTaskStore::new();

        let first = store.add(sample_task(None)).await;
        let second = store.add(sample_task(Some(1))).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_by_assigned_user() {
        let store = InMemoryTaskStore::new();
        store.add(sample_task(Some(1))).await;
        store.add(sample_task(Some(2))).await;
        store.add(sample_task(Some(1))).await;
        store.add(sample_task(None)).await;

        let for_one = store.get_by_assigned_user(1).await;
        assert_eq!(for_one.len(), 2);
        assert!(for_one.iter().all(|t| t.assigned_user_id == Some(1)));

        let for_three = store.get_by_assigned_user(3).await;
        assert!(for_three.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = InMemoryTaskStore::new();
        let mut task = store.add(sample_task(Some(1))).await;

        task.status = TaskStatus::Completed;
        assert!(store.update(task.clone()).await);
        assert_eq!(
            store.get_by_id(task.id).await.unwrap().status,
            TaskStatus::Completed
        );

        assert!(store.delete(task.id).await);
        assert!(store.get_by_id(task.id).await.is_none());
        assert!(!store.update(task).await);
    }
}
