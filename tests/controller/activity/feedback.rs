use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::EntityTrait;
use servia::{
    controller::activity::{leave_feedback, FeedbackPayload},
    model::{role::Role, session::auth::SessionAuth},
};
use servia_test_utils::prelude::*;

#[tokio::test]
// Feedback with a comment and rating is persisted
async fn records_feedback() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let db = &test.state.db;

    let (_, owner) = fixtures::create_user(db, "Alice", true).await?;
    let (donor_auth, _) = fixtures::create_user(db, "Bob", true).await?;
    let (_, cause, _) = fixtures::create_ngo_cause(db, owner.user_id, 2, "CleanBeach", true).await?;

    SessionAuth::insert(&test.session, donor_auth.id, Role::User)
        .await
        .unwrap();

    let result = leave_feedback(
        State(test.state()),
        test.session.clone(),
        Path(cause.cause_id),
        Json(FeedbackPayload {
            comment: Some("Great work!".to_string()),
            rating: Some(5),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let feedback = entity::prelude::Feedback::find().all(db).await?;
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].rating, Some(5));

    Ok(())
}

#[tokio::test]
// A rating outside 1..=5 is rejected with 400
async fn rejects_out_of_range_rating() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (donor_auth, _) = fixtures::create_user(&test.state.db, "Bob", true).await?;
    SessionAuth::insert(&test.session, donor_auth.id, Role::User)
        .await
        .unwrap();

    let result = leave_feedback(
        State(test.state()),
        test.session.clone(),
        Path(2),
        Json(FeedbackPayload {
            comment: None,
            rating: Some(0),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
