use std::sync::Arc;

use crate::models::{Task, TaskStatus};
use crate::store::TaskStore;

/// Task CRUD over a [`TaskStore`], plus the assignee-gated status update.
///
/// Apart from `update_status`, operations are store passthroughs; callers
/// apply the authorization decisions from `policy` first.
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, task: Task) -> Task {
        self.store.add(task).await
    }

    pub async fn get_by_id(&self, id: i32) -> Option<Task> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Vec<Task> {
        self.store.get_all().await
    }

    pub async fn get_by_assigned_user(&self, user_id: i32) -> Vec<Task> {
        self.store.get_by_assigned_user(user_id).await
    }

    /// Replaces the stored task. The caller is responsible for having already
    /// applied the full-vs-restricted field merge for its principal.
    pub async fn update(&self, task: Task) -> bool {
        self.store.update(task).await
    }

    /// Sets the status if `acting_user_id` is the task's assignee.
    ///
    /// Returns `false` when the task does not exist or is assigned to someone
    /// else; the two causes are deliberately indistinguishable here.
    pub async fn update_status(
        &self,
        task_id: i32,
        status: TaskStatus,
        acting_user_id: i32,
    ) -> bool {
        let Some(mut task) = self.store.get_by_id(task_id).await else {
            return false;
        };

        // Only the assigned user may progress the task through this entry point
        if task.assigned_user_id != Some(acting_user_id) {
            return false;
        }

        task.status = status;
        self.store.update(task).await;
        true
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTaskStore;
    use chrono::Utc;

    fn service() -> TaskService {
        TaskService::new(Arc::new(InMemoryTaskStore::new()))
    }

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
    async fn test_update_status_by_assignee() {
        let service = service();
        let task = service.create(sample_task(Some(2))).await;

        let result = service
            .update_status(task.id, TaskStatus::Completed, 2)
            .await;

        assert!(result);
        assert_eq!(
            service.get_by_id(task.id).await.unwrap().status,
            TaskStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_update_status_by_other_user() {
        let service = service();
        let task = service.create(sample_task(Some(2))).await;

        let result = service
            .update_status(task.id, TaskStatus::Completed, 3)
            .await;

        assert!(!result);
        // Status unchanged
        assert_eq!(
            service.get_by_id(task.id).await.unwrap().status,
            TaskStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_update_status_missing_task() {
        let service = service();

        let result = service.update_status(99, TaskStatus::Completed, 2).await;
        assert!(!result);
    }

    #[tokio::test]
    async fn test_update_status_unassigned_task() {
        let service = service();
        let task = service.create(sample_task(None)).await;

        let result = service
            .update_status(task.id, TaskStatus::InProgress, 2)
            .await;
        assert!(!result);
    }

    #[tokio::test]
    async fn test_crud_passthrough() {
        let service = service();
        let mut task = service.create(sample_task(Some(1))).await;
        assert_eq!(task.id, 1);

        task.title = "Renamed".to_string();
        assert!(service.update(task.clone()).await);
        assert_eq!(service.get_by_id(task.id).await.unwrap().title, "Renamed");

        assert_eq!(service.get_by_assigned_user(1).await.len(), 1);
        assert_eq!(service.get_all().await.len(), 1);

        assert!(service.delete(task.id).await);
        assert!(!service.delete(task.id).await);
    }
}
