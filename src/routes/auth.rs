use crate::{
    auth::{generate_token, LoginRequest, LoginResponse},
    error::AppError,
    services::UserService,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Login
///
/// Authenticates a user and returns a signed token asserting their identity
/// and role. The failure message is the same for an unknown username and a
/// wrong password.
#[post("/login")]
pub async fn login(
    users: web::Data<UserService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    match users
        .authenticate(&login_data.username, &login_data.password)
        .await?
    {
        Some(user) => {
            let token = generate_token(&user)?;
            Ok(HttpResponse::Ok().json(LoginResponse {
                token,
                user_id: user.id,
                username: user.username,
                role: user.role,
            }))
        }
        None => Err(AppError::Unauthorized("Invalid username or password".into())),
    }
}
