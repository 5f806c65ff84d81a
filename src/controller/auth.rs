use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::AuthRepository,
    error::{registration::RegistrationError, Error},
    model::{
        api::{ErrorDto, LoginDto, MessageDto, RegisteredDto, SessionIdentityDto},
        app::AppState,
        role::Role,
        session::auth::SessionAuth,
    },
    service::{
        auth::AuthService,
        registration::{RegisterCauseData, RegisterUserData, RegistrationService},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, utoipa::ToSchema)]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    /// Owner user id, required for ngo/event registrations.
    pub user_id: Option<i32>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub if_online: Option<bool>,
    pub year_est: Option<i32>,
    pub capacity: Option<i32>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub ngo_id: Option<i32>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginPayload {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Register a new user, NGO, or event account
///
/// Creates an unverified auth record plus the role-specific profile row. NGO
/// and event registrations additionally require the id of a verified owner
/// user. The account stays unusable until an admin verifies it.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Account created, awaiting admin verification", body = RegisteredDto),
        (status = 400, description = "Missing required field or unknown role", body = ErrorDto),
        (status = 403, description = "Owner user not verified", body = ErrorDto),
        (status = 404, description = "Owner user not found", body = ErrorDto),
        (status = 409, description = "Account name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, Error> {
    let name = payload.name.ok_or(RegistrationError::MissingField("name"))?;
    let password = payload
        .password
        .ok_or(RegistrationError::MissingField("password"))?;
    let role_str = payload.role.ok_or(RegistrationError::MissingField("role"))?;

    let role = role_str
        .parse::<Role>()
        .map_err(|_| RegistrationError::InvalidRole(role_str.clone()))?;

    let registration_service = RegistrationService::new(&state.db);

    match role {
        Role::User => {
            let (auth_id, user_id) = registration_service
                .register_user(RegisterUserData {
                    name,
                    password,
                    email: payload.email,
                    age: payload.age,
                })
                .await?;

            Ok((
                StatusCode::CREATED,
                Json(RegisteredDto {
                    message: "User created, awaiting admin verification.".to_string(),
                    auth_id,
                    user_id: Some(user_id),
                    cause_id: None,
                }),
            ))
        }
        Role::Ngo | Role::Event => {
            let owner_user_id = payload
                .user_id
                .ok_or(RegistrationError::MissingField("user_id"))?;

            let (auth_id, cause_id) = registration_service
                .register_cause(
                    role,
                    RegisterCauseData {
                        name,
                        password,
                        owner_user_id,
                        email: payload.email,
                        description: payload.description,
                        logo: payload.logo,
                        if_online: payload.if_online.unwrap_or(false),
                        year_est: payload.year_est,
                        age: payload.age,
                        capacity: payload.capacity,
                        date: payload.date,
                        time: payload.time,
                        ngo_id: payload.ngo_id,
                    },
                )
                .await?;

            Ok((
                StatusCode::CREATED,
                Json(RegisteredDto {
                    message: format!("{} created, awaiting admin verification.", role),
                    auth_id,
                    user_id: None,
                    cause_id: Some(cause_id),
                }),
            ))
        }
        // Admin accounts are bootstrapped at startup, never self-registered.
        Role::Admin => Err(RegistrationError::InvalidRole(role_str).into()),
    }
}

/// Log in with name and password
///
/// Verifies the credentials and the admin verification gate, then stores the
/// identity in the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = LoginDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 401, description = "Unknown name or wrong password", body = ErrorDto),
        (status = 403, description = "Account not verified by admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, Error> {
    let name = payload.name.ok_or(RegistrationError::MissingField("name"))?;
    let password = payload
        .password
        .ok_or(RegistrationError::MissingField("password"))?;

    let auth_service = AuthService::new(&state.db);
    let auth = auth_service.login(&name, &password).await?;

    let role = auth.role.parse::<Role>().map_err(|_| {
        Error::InternalError(format!(
            "auth record {} carries unknown role {:?}",
            auth.id, auth.role
        ))
    })?;

    SessionAuth::insert(&session, auth.id, role).await?;

    Ok((
        StatusCode::OK,
        Json(LoginDto {
            auth_id: auth.id,
            role,
            name: auth.name,
        }),
    ))
}

/// Log out by clearing the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_auth = SessionAuth::get(&session).await?;

    // Only clear when an identity is actually present
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_auth.is_some() {
        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the identity currently stored in the session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session identity", body = SessionIdentityDto),
        (status = 404, description = "No identity in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_auth = match SessionAuth::get(&session).await? {
        Some(auth) => auth,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response())
        }
    };

    let auth_repository = AuthRepository::new(&state.db);
    let auth = match auth_repository.get_by_id(session_auth.auth_id).await? {
        Some(auth) => auth,
        None => {
            // Clear session for an identity no longer in the database
            session.clear().await;

            tracing::warn!(
                "Failed to find auth ID {} in database despite having an active session; \
                cleared session, they will need to log in again",
                session_auth.auth_id
            );

            return Ok((
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response());
        }
    };

    let role = auth.role.parse::<Role>().map_err(|_| {
        Error::InternalError(format!(
            "auth record {} carries unknown role {:?}",
            auth.id, auth.role
        ))
    })?;

    Ok((
        StatusCode::OK,
        Json(SessionIdentityDto {
            auth_id: auth.id,
            name: auth.name,
            role,
            verified: auth.verified,
        }),
    )
        .into_response())
}
