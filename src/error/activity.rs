use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Donation requires an amount")]
    MissingAmount,
    #[error("Donation amount must be greater than zero")]
    InvalidAmount,
    #[error("Feedback rating must be between 1 and 5")]
    InvalidRating,
    #[error("Cause ID {0:?} has not been verified by an admin")]
    CauseNotVerified(i32),
    #[error("Session role {0:?} cannot record activity, a donor account is required")]
    UserRoleRequired(String),
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingAmount => (
                StatusCode::BAD_REQUEST,
                "Missing required field: amount".to_string(),
            ),
            Self::InvalidAmount => (
                StatusCode::BAD_REQUEST,
                "Donation amount must be greater than zero".to_string(),
            ),
            Self::InvalidRating => (
                StatusCode::BAD_REQUEST,
                "Rating must be between 1 and 5".to_string(),
            ),
            Self::CauseNotVerified(_) => (
                StatusCode::FORBIDDEN,
                "Cause not verified by admin".to_string(),
            ),
            Self::UserRoleRequired(_) => (
                StatusCode::FORBIDDEN,
                "A donor account is required".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
