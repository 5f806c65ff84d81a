use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::current_auth,
    error::{activity::ActivityError, Error},
    model::{
        api::{CreatedDto, ErrorDto},
        app::AppState,
    },
    service::activity::ActivityService,
};

pub static ACTIVITY_TAG: &str = "activity";

#[derive(Deserialize, utoipa::ToSchema)]
pub struct DonationPayload {
    pub amount: Option<f64>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct FeedbackPayload {
    pub comment: Option<String>,
    pub rating: Option<i32>,
}

/// Donate to a verified cause
#[utoipa::path(
    post,
    path = "/api/causes/{cause_id}/donations",
    tag = ACTIVITY_TAG,
    params(("cause_id" = i32, Path, description = "Cause to donate to")),
    request_body = DonationPayload,
    responses(
        (status = 201, description = "Donation recorded", body = CreatedDto),
        (status = 400, description = "Missing or non-positive amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Cause not verified or wrong role", body = ErrorDto),
        (status = 404, description = "Cause not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn donate(
    State(state): State<AppState>,
    session: Session,
    Path(cause_id): Path<i32>,
    Json(payload): Json<DonationPayload>,
) -> Result<impl IntoResponse, Error> {
    let auth = current_auth(&session).await?;

    let amount = payload.amount.ok_or(ActivityError::MissingAmount)?;

    let donation = ActivityService::new(&state.db)
        .donate(auth, cause_id, amount)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Donation recorded".to_string(),
            id: donation.donation_id,
        }),
    ))
}

/// Leave feedback on a verified cause
#[utoipa::path(
    post,
    path = "/api/causes/{cause_id}/feedback",
    tag = ACTIVITY_TAG,
    params(("cause_id" = i32, Path, description = "Cause to review")),
    request_body = FeedbackPayload,
    responses(
        (status = 201, description = "Feedback recorded", body = CreatedDto),
        (status = 400, description = "Rating outside 1 to 5", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Cause not verified or wrong role", body = ErrorDto),
        (status = 404, description = "Cause not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(cause_id): Path<i32>,
    Json(payload): Json<FeedbackPayload>,
) -> Result<impl IntoResponse, Error> {
    let auth = current_auth(&session).await?;

    let feedback = ActivityService::new(&state.db)
        .leave_feedback(auth, cause_id, payload.comment, payload.rating)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Feedback recorded".to_string(),
            id: feedback.feedback_id,
        }),
    ))
}

/// Volunteer for a verified cause
#[utoipa::path(
    post,
    path = "/api/causes/{cause_id}/volunteer",
    tag = ACTIVITY_TAG,
    params(("cause_id" = i32, Path, description = "Cause to volunteer for")),
    responses(
        (status = 201, description = "Volunteer role recorded", body = CreatedDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Cause not verified or wrong role", body = ErrorDto),
        (status = 404, description = "Cause not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn volunteer(
    State(state): State<AppState>,
    session: Session,
    Path(cause_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let auth = current_auth(&session).await?;

    let volunteer = ActivityService::new(&state.db)
        .volunteer(auth, cause_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Volunteer role recorded".to_string(),
            id: volunteer.volunteer_id,
        }),
    ))
}
