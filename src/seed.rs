//! Demo data loaded on startup when the user store is empty.

use chrono::{Duration, Utc};

use crate::error::AppError;
use crate::models::{CreateUserRequest, Role, Task, TaskStatus};
use crate::services::{TaskService, UserService};

/// Seeds an admin, a regular user and a few sample tasks.
///
/// Does nothing when users already exist, so a warm store is never touched.
pub async fn seed_demo_data(users: &UserService, tasks: &TaskService) -> Result<(), AppError> {
    if !users.get_all().await.is_empty() {
        log::info!("Store already contains data, skipping seed");
        return Ok(());
    }

    log::info!("Seeding demo data");

    let admin = users
        .create(CreateUserRequest {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        })
        .await?;

    let user = users
        .create(CreateUserRequest {
            username: "user".to_string(),
            password: "user123".to_string(),
            email: "user@example.com".to_string(),
            role: Role::User,
        })
        .await?;

    let now = Utc::now();
    let samples = [
        Task {
            id: 0,
            title: "Complete project proposal".to_string(),
            description: "Create a detailed project proposal document".to_string(),
            due_date: now + Duration::days(7),
            status: TaskStatus::Pending,
            assigned_user_id: Some(admin.id),
        },
        Task {
            id: 0,
            title: "Review code changes".to_string(),
            description: "Review pull request #42".to_string(),
            due_date: now + Duration::days(2),
            status: TaskStatus::InProgress,
            assigned_user_id: Some(user.id),
        },
        Task {
            id: 0,
            title: "Fix login bug".to_string(),
            description: "Fix the authentication issue reported by QA".to_string(),
            due_date: now + Duration::days(1),
            status: TaskStatus::Pending,
            assigned_user_id: Some(user.id),
        },
    ];

    for task in samples {
        tasks.create(task).await;
    }

    log::info!("Demo data seeded successfully");
    Ok(())
}
