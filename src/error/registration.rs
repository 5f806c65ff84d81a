use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unknown role {0:?}, must be user, ngo, or event")]
    InvalidRole(String),
    #[error("An account named {0:?} already exists")]
    DuplicateName(String),
    #[error("Owner user ID {0:?} does not exist")]
    OwnerNotFound(i32),
    #[error("Owner user ID {0:?} has not been verified yet")]
    OwnerNotVerified(i32),
    #[error("Failed to allocate a cause id after {0} attempts")]
    IdAllocationFailed(u32),
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {}", field),
            ),
            Self::InvalidRole(_) => (
                StatusCode::BAD_REQUEST,
                "Role must be user, ngo, or event".to_string(),
            ),
            Self::DuplicateName(_) => (
                StatusCode::CONFLICT,
                "An account with that name already exists".to_string(),
            ),
            Self::OwnerNotFound(_) => (
                StatusCode::NOT_FOUND,
                "Owner user does not exist".to_string(),
            ),
            Self::OwnerNotVerified(_) => (
                StatusCode::FORBIDDEN,
                "Owner user must be verified first".to_string(),
            ),
            Self::IdAllocationFailed(_) => return InternalServerError(self).into_response(),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
