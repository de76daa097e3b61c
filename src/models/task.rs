use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status of a task, ordered by workflow.
///
/// No transition order is enforced: any status may follow any other.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task is yet to be started.
    Pending,
    /// Task is currently being worked on.
    InProgress,
    /// Task is finished.
    Completed,
}

/// A task as held by the store.
///
/// `assigned_user_id` is a weak reference: it may point at a user that has
/// since been deleted, in which case it simply matches no principal.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub assigned_user_id: Option<i32>,
}

/// Outward representation of a task, with the assignee's username resolved.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub assigned_user_id: Option<i32>,
    /// Absent when the task is unassigned or the assignee no longer exists.
    pub assigned_username: Option<String>,
}

impl TaskDto {
    pub fn new(task: &Task, assigned_username: Option<String>) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            status: task.status,
            assigned_user_id: task.assigned_user_id,
            assigned_username,
        }
    }
}

/// Payload for creating a task (admin operation).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub assigned_user_id: Option<i32>,
}

/// Payload for the full-update entry point.
///
/// Admins replace every field; an assignee only has their `status` applied,
/// the other fields retain their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub assigned_user_id: Option<i32>,
}

/// Payload for the status-only entry point.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}
