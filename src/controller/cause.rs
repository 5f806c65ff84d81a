use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{CauseDetailDto, CauseSummaryDto, ErrorDto},
        app::AppState,
    },
    service::cause::CauseService,
};

pub static CAUSE_TAG: &str = "causes";

/// List every verified cause
///
/// Each entry flattens the representative location's coordinates, all contact
/// strings, all social handles, and the subtype-specific fields into one
/// object. Unverified causes never appear here.
#[utoipa::path(
    get,
    path = "/api/causes",
    tag = CAUSE_TAG,
    responses(
        (status = 200, description = "All verified causes", body = Vec<CauseSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_causes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let causes = CauseService::new(&state.db).list_public().await?;

    Ok((StatusCode::OK, Json(causes)))
}

/// Get the detail view of a verified cause
#[utoipa::path(
    get,
    path = "/api/causes/{cause_id}",
    tag = CAUSE_TAG,
    params(("cause_id" = i32, Path, description = "Cause to fetch")),
    responses(
        (status = 200, description = "Cause detail with full location list", body = CauseDetailDto),
        (status = 404, description = "Cause missing or not verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cause(
    State(state): State<AppState>,
    Path(cause_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let detail = CauseService::new(&state.db).get_detail(cause_id).await?;

    Ok((StatusCode::OK, Json(detail)))
}
