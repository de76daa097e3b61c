use crate::{
    auth::AuthenticatedPrincipal,
    error::AppError,
    models::{CreateUserRequest, UpdateUserRequest, UserDto},
    policy,
    services::UserService,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Lists every user account. Admin only.
#[get("")]
pub async fn list_users(
    users: web::Data<UserService>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;

    let dtos: Vec<UserDto> = users.get_all().await.iter().map(UserDto::from).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

/// Retrieves a single user. Allowed for an admin or for the user themselves.
///
/// ## Responses:
/// - `200 OK`: Returns the `UserDto` as JSON.
/// - `403 Forbidden`: Another non-admin user's account was requested.
/// - `404 Not Found`: No user with the given id.
#[get("/{id}")]
pub async fn get_user(
    users: web::Data<UserService>,
    user_id: web::Path<i32>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    let id = user_id.into_inner();

    let user = users
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    policy::require_user_view(&principal.0, id)?;

    Ok(HttpResponse::Ok().json(UserDto::from(&user)))
}

/// Creates a user account. Admin only.
///
/// The plaintext password is digested by the service before it is stored;
/// the response never carries credential material.
#[post("")]
pub async fn create_user(
    users: web::Data<UserService>,
    user_data: web::Json<CreateUserRequest>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;
    user_data.validate()?;

    let created = users.create(user_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserDto::from(&created)))
}

/// Updates a user's email, role and optionally their password. Admin only.
///
/// The username is immutable. An empty or absent password leaves the stored
/// digest untouched.
#[put("/{id}")]
pub async fn update_user(
    users: web::Data<UserService>,
    user_id: web::Path<i32>,
    user_data: web::Json<UpdateUserRequest>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;
    user_data.validate()?;

    match users.update(user_id.into_inner(), user_data.into_inner()).await? {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Err(AppError::NotFound("User not found".into())),
    }
}

/// Deletes a user account. Admin only.
///
/// Tasks assigned to the deleted user keep their assignee id; the reference
/// dangles and simply matches nobody from then on.
#[delete("/{id}")]
pub async fn delete_user(
    users: web::Data<UserService>,
    user_id: web::Path<i32>,
    principal: AuthenticatedPrincipal,
) -> Result<impl Responder, AppError> {
    policy::require_admin(&principal.0)?;

    if users.delete(user_id.into_inner()).await {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("User not found".into()))
    }
}
