use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;
use crate::policy::Principal;

/// Extracts the authenticated principal from request extensions.
///
/// This extractor is intended to be used on routes protected by
/// `AuthMiddleware`, which is responsible for validating the JWT and
/// inserting the decoded claims into request extensions.
///
/// If no claims are found in the extensions (e.g., if `AuthMiddleware` did not
/// run), this extractor will return an `AppError::Unauthorized` error.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedPrincipal(pub Principal);

impl FromRequest for AuthenticatedPrincipal {
    type Error = ActixError; // AppError will be converted into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedPrincipal(Principal {
                id: claims.sub,
                role: claims.role,
            }))),
            None => {
                // This case should not be reached if AuthMiddleware is correctly
                // applied and has inserted the claims. Responding with
                // Unauthorized is a safe default.
                let err = AppError::Unauthorized(
                    "No authenticated principal in request. Ensure AuthMiddleware is active."
                        .to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
