use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    error::Error,
    model::{
        api::{AdminCauseDto, AdminUserDto, ErrorDto, MessageDto},
        app::AppState,
    },
    service::admin::AdminService,
};

pub static ADMIN_TAG: &str = "admin";

/// List every user account
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users with their auth roles", body = Vec<AdminUserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let users = AdminService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List every cause regardless of verification state
#[utoipa::path(
    get,
    path = "/api/admin/causes",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All causes with their subtypes", body = Vec<AdminCauseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_causes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let causes = AdminService::new(&state.db).list_causes().await?;

    Ok((StatusCode::OK, Json(causes)))
}

/// Verify an account
///
/// Sets the verified flag on the auth record and mirrors it onto the linked
/// user or cause profile.
#[utoipa::path(
    patch,
    path = "/api/admin/verify/{auth_id}",
    tag = ADMIN_TAG,
    params(("auth_id" = i32, Path, description = "Auth record to verify")),
    responses(
        (status = 200, description = "Account verified", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Auth record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    session: Session,
    Path(auth_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    AdminService::new(&state.db)
        .set_verified(auth_id, true)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Verified".to_string(),
        }),
    ))
}

/// Revoke an account's verification
#[utoipa::path(
    patch,
    path = "/api/admin/unverify/{auth_id}",
    tag = ADMIN_TAG,
    params(("auth_id" = i32, Path, description = "Auth record to unverify")),
    responses(
        (status = 200, description = "Account unverified", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Auth record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unverify(
    State(state): State<AppState>,
    session: Session,
    Path(auth_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    AdminService::new(&state.db)
        .set_verified(auth_id, false)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Unverified".to_string(),
        }),
    ))
}

/// Delete a user together with every cause it owns
#[utoipa::path(
    delete,
    path = "/api/admin/delete/user/{user_id}",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "User to delete")),
    responses(
        (status = 200, description = "User and dependents deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    AdminService::new(&state.db).delete_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}

/// Delete a cause together with its subtype and dependent rows
#[utoipa::path(
    delete,
    path = "/api/admin/delete/cause/{cause_id}",
    tag = ADMIN_TAG,
    params(("cause_id" = i32, Path, description = "Cause to delete")),
    responses(
        (status = 200, description = "Cause and dependents deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Cause not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cause(
    State(state): State<AppState>,
    session: Session,
    Path(cause_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    AdminService::new(&state.db).delete_cause(cause_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Cause deleted".to_string(),
        }),
    ))
}
