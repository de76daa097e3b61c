//!
//! # Authorization Policy
//!
//! Every access decision in the application lives here, as pure functions of
//! (principal, operation, target). Handlers call through this module before
//! touching a service; no handler carries its own role or ownership check.
//!
//! The rules:
//! - Listing all users or tasks, and creating, updating or deleting users and
//!   tasks, require the `Admin` role.
//! - A single user is visible to an admin or to that user themselves.
//! - A single task is visible to an admin or to its assignee.
//! - A full task update replaces every field for an admin; the assignee may
//!   only have the status applied; anyone else is denied.

use crate::error::AppError;
use crate::models::{Role, Task, UpdateTaskRequest};

/// The authenticated caller's identity and role, derived from a verified
/// credential by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: i32,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// How much of a task-update request the principal may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskUpdateAccess {
    /// Every field from the request replaces the stored value.
    Full,
    /// Only `status` is applied; all other fields retain prior values.
    StatusOnly,
}

/// Gate for admin-only operations: list-all-users, list-all-tasks,
/// create/update/delete of users and tasks.
pub fn require_admin(principal: &Principal) -> Result<(), AppError> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin role required".into()))
    }
}

/// A single user is visible to an admin or to that user themselves.
pub fn require_user_view(principal: &Principal, user_id: i32) -> Result<(), AppError> {
    if principal.is_admin() || principal.id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden("Not allowed to view this user".into()))
    }
}

/// A single task is visible to an admin or to its assignee.
///
/// Callers must have established that the task exists before asking; a
/// missing task is a not-found condition, not an authorization one.
pub fn require_task_view(principal: &Principal, task: &Task) -> Result<(), AppError> {
    if principal.is_admin() || task.assigned_user_id == Some(principal.id) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Not allowed to view this task".into()))
    }
}

/// Decides how much of an update request the principal may apply to `task`.
///
/// Admins get full field replacement. The assignee gets a status-only
/// restriction. Everyone else is denied.
pub fn task_update_access(
    principal: &Principal,
    task: &Task,
) -> Result<TaskUpdateAccess, AppError> {
    if principal.is_admin() {
        return Ok(TaskUpdateAccess::Full);
    }
    if task.assigned_user_id == Some(principal.id) {
        return Ok(TaskUpdateAccess::StatusOnly);
    }
    Err(AppError::Forbidden("Not allowed to update this task".into()))
}

/// Applies `request` to `task` under the given access level.
///
/// Lives next to the decision so the field-level write restriction cannot
/// drift from it.
pub fn apply_task_update(task: &mut Task, request: &UpdateTaskRequest, access: TaskUpdateAccess) {
    match access {
        TaskUpdateAccess::Full => {
            task.title = request.title.clone();
            task.description = request.description.clone();
            task.due_date = request.due_date;
            task.status = request.status;
            task.assigned_user_id = request.assigned_user_id;
        }
        TaskUpdateAccess::StatusOnly => {
            task.status = request.status;
        }
    }
}
