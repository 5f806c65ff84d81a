use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use servia::{
    controller::activity::volunteer,
    model::{role::Role, session::auth::SessionAuth},
};
use servia_test_utils::prelude::*;

#[tokio::test]
// A logged-in donor can volunteer for a verified cause
async fn records_volunteer_role() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let db = &test.state.db;

    let (_, owner) = fixtures::create_user(db, "Alice", true).await?;
    let (donor_auth, donor) = fixtures::create_user(db, "Bob", true).await?;
    let (_, cause, _) = fixtures::create_event_cause(db, owner.user_id, 1, "ParkRun", true).await?;

    SessionAuth::insert(&test.session, donor_auth.id, Role::User)
        .await
        .unwrap();

    let result = volunteer(
        State(test.state()),
        test.session.clone(),
        Path(cause.cause_id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let volunteers = entity::prelude::Volunteer::find().all(db).await?;
    assert_eq!(volunteers.len(), 1);
    assert_eq!(volunteers[0].user_id, donor.user_id);

    Ok(())
}

#[tokio::test]
// Volunteering for an unverified cause is rejected with 403
async fn rejects_unverified_cause() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let db = &test.state.db;

    let (_, owner) = fixtures::create_user(db, "Alice", true).await?;
    let (donor_auth, _) = fixtures::create_user(db, "Bob", true).await?;
    let (_, cause, _) = fixtures::create_ngo_cause(db, owner.user_id, 2, "Pending", false).await?;

    SessionAuth::insert(&test.session, donor_auth.id, Role::User)
        .await
        .unwrap();

    let result = volunteer(
        State(test.state()),
        test.session.clone(),
        Path(cause.cause_id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
