use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login failed: unknown name or wrong password")]
    InvalidCredentials,
    #[error("Account {0:?} has not been verified by an admin")]
    NotVerified(String),
    #[error("No identity present in session")]
    NotLoggedIn,
    #[error("Auth ID {0:?} found in session but not in database")]
    IdentityNotInDatabase(i32),
    #[error("Session role {0:?} is not allowed to call an admin route")]
    AdminOnly(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::NotVerified(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account not verified by admin".to_string(),
                }),
            )
                .into_response(),
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::IdentityNotInDatabase(auth_id) => {
                tracing::debug!(auth_id = %auth_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AdminOnly(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Admin only".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
