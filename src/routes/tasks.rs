use crate::{
    auth::AuthenticatedPrincipal,
    error::AppError,
    models::{CreateTaskRequest, Task, TaskDto, UpdateTaskRequest, UpdateTaskStatusRequest},
    policy,
    services::{TaskService, UserService},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Resolves the assignee's username for outward task representations.
/// A dangling or absent assignee yields no username.
async fn to_dto(users: &UserService, task: &Task) -> TaskDto {
    let assigned_username = match task.assigned_user_id {
        Some(user_id) => users.get_by_id(user_id).await.map(|u| u.username),
        None => None,
    };
    TaskDto::new(task, assigned_username)
}

/// Lists every task. Admin only.
#[get("")]
pub async fn list_tasks(
    tasks: web::Data<TaskService>,
    users: web::Data<UserService>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;

    let mut dtos = Vec::new();
    for task in tasks.get_all().await {
        dtos.push(to_dto(&users, &task).await);
    }
    Ok(HttpResponse::Ok().json(dtos))
}

/// Lists the tasks assigned to the calling user.
#[get("/user")]
pub async fn get_user_tasks(
    tasks: web::Data<TaskService>,
    users: web::Data<UserService>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    let mut dtos = Vec::new();
    for task in tasks.get_by_assigned_user(principal.0.id).await {
        dtos.push(to_dto(&users, &task).await);
    }
    Ok(HttpResponse::Ok().json(dtos))
}

/// Retrieves a single task. Allowed for an admin or the task's assignee.
///
/// ## Responses:
/// - `200 OK`: Returns the `TaskDto` as JSON.
/// - `403 Forbidden`: The caller is neither an admin nor the assignee.
/// - `404 Not Found`: No task with the given id. The existence check runs
///   before the authorization check.
#[get("/{id}")]
pub async fn get_task(
    tasks: web::Data<TaskService>,
    users: web::Data<UserService>,
    task_id: web::Path<i32>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    let task = tasks
        .get_by_id(task_id.into_inner())
        .await
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    policy::require_task_view(&principal.0, &task)?;

    Ok(HttpResponse::Ok().json(to_dto(&users, &task).await))
}

/// Creates a task with any status and assignee. Admin only.
#[post("")]
pub async fn create_task(
    tasks: web::Data<TaskService>,
    users: web::Data<UserService>,
    task_data: web::Json<CreateTaskRequest>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;
    task_data.validate()?;

    let request = task_data.into_inner();
    let task = Task {
        id: 0, // assigned by the store
        title: request.title,
        description: request.description,
        due_date: request.due_date,
        status: request.status,
        assigned_user_id: request.assigned_user_id,
    };

    let created = tasks.create(task).await;
    Ok(HttpResponse::Created().json(to_dto(&users, &created).await))
}

/// Full-update entry point.
///
/// Admins replace every field from the request. The task's assignee may
/// submit the same payload but only the status is applied; all other fields
/// retain their stored values. Anyone else is denied.
///
/// ## Responses:
/// - `204 No Content`: The update was applied.
/// - `403 Forbidden`: The caller is neither an admin nor the assignee.
/// - `404 Not Found`: No task with the given id.
#[put("/{id}")]
pub async fn update_task(
    tasks: web::Data<TaskService>,
    task_id: web::Path<i32>,
    task_data: web::Json<UpdateTaskRequest>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let mut task = tasks
        .get_by_id(task_id.into_inner())
        .await
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    let access = policy::task_update_access(&principal.0, &task)?;
    policy::apply_task_update(&mut task, &task_data, access);

    tasks.update(task).await;
    Ok(HttpResponse::NoContent().finish())
}

/// Status-only entry point, gated on being the task's assignee.
///
/// A missing task and a task assigned to someone else both map to
/// `404 Not Found`; this entry point does not distinguish the two.
#[put("/{id}/status")]
pub async fn update_task_status(
    tasks: web::Data<TaskService>,
    task_id: web::Path<i32>,
    status_data: web::Json<UpdateTaskStatusRequest>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    let success = tasks
        .update_status(task_id.into_inner(), status_data.status, principal.0.id)
        .await;

    if success {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Task not found".into()))
    }
}

/// Deletes a task. Admin only.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<TaskService>,
    task_id: web::Path<i32>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;

    if tasks.delete(task_id.into_inner()).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Task not found".into()))
    }
}
