//! Error types for the Servia server application.
//!
//! This module provides a layered error handling system with specialized error
//! types for different domains (authentication, registration, activity records,
//! configuration). All errors implement `IntoResponse` for Axum HTTP responses
//! and use `thiserror` for ergonomic error definitions.

pub mod activity;
pub mod auth;
pub mod config;
pub mod registration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        activity::ActivityError, auth::AuthError, config::ConfigError,
        registration::RegistrationError,
    },
    model::api::ErrorDto,
};

/// Main error type for the Servia server application.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error type, with automatic conversion from underlying error
/// types via the `?` operator. The `IntoResponse` implementation maps errors to
/// appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session state, admin gating).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Registration error (validation, ownership, duplicate names).
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// Activity record error (donations, feedback, volunteering).
    #[error(transparent)]
    ActivityError(#[from] ActivityError),
    /// A referenced record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Internal error indicating a bug in Servia's code.
    #[error("Internal error with Servia's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Password hashing error.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl Error {
    /// Unwraps a SeaORM transaction error into the application error type.
    pub fn from_transaction(err: sea_orm::TransactionError<Error>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(e) => Error::DbErr(e),
            sea_orm::TransactionError::Transaction(e) => e,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; everything else is treated
/// as an internal server error (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RegistrationError(err) => err.into_response(),
            Self::ActivityError(err) => err.into_response(),
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", capitalize(what)),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic message to
/// the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
