use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use servia::{controller::auth::register, model::api::RegisteredDto};
use servia_test_utils::prelude::*;

use crate::controller::{
    auth::{empty_payload, ngo_payload, user_payload},
    read_json,
};

#[tokio::test]
// A donor registration creates an unverified auth record plus a user profile
async fn creates_unverified_user() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = register(State(test.state()), Json(user_payload("Alice"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: RegisteredDto = read_json(resp).await;
    assert!(body.user_id.is_some());

    let auth = entity::prelude::AuthData::find_by_id(body.auth_id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert!(!auth.verified);

    Ok(())
}

#[tokio::test]
// Missing required fields are rejected with 400
async fn rejects_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = register(State(test.state()), Json(empty_payload())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// Unknown roles are rejected with 400
async fn rejects_unknown_role() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let mut payload = user_payload("Alice");
    payload.role = Some("organizer".to_string());

    let result = register(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// Admin accounts cannot be self-registered
async fn rejects_admin_role() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let mut payload = user_payload("Mallory");
    payload.role = Some("admin".to_string());

    let result = register(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// A duplicate name never creates a second auth row
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    register(State(test.state()), Json(user_payload("Alice")))
        .await
        .unwrap();

    let result = register(State(test.state()), Json(user_payload("Alice"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let auth_rows = entity::prelude::AuthData::find().all(&test.state.db).await?;
    assert_eq!(auth_rows.len(), 1);

    Ok(())
}

#[tokio::test]
// An NGO registration without an owner id is rejected with 400
async fn rejects_ngo_without_owner() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let mut payload = ngo_payload("CleanBeach", 1);
    payload.user_id = None;

    let result = register(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
// An NGO registration with a nonexistent owner creates no cause row
async fn rejects_ngo_with_missing_owner() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = register(State(test.state()), Json(ngo_payload("CleanBeach", 999))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let causes = entity::prelude::Cause::find().all(&test.state.db).await?;
    assert!(causes.is_empty());

    Ok(())
}

#[tokio::test]
// An NGO registration with an unverified owner creates no cause row
async fn rejects_ngo_with_unverified_owner() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (_, owner) = fixtures::create_user(&test.state.db, "Alice", false).await?;

    let result = register(
        State(test.state()),
        Json(ngo_payload("CleanBeach", owner.user_id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let causes = entity::prelude::Cause::find().all(&test.state.db).await?;
    assert!(causes.is_empty());

    Ok(())
}

#[tokio::test]
// Consecutive NGO registrations get distinct even ids
async fn assigns_distinct_even_ids() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (_, owner) = fixtures::create_user(&test.state.db, "Alice", true).await?;

    let first = register(
        State(test.state()),
        Json(ngo_payload("First", owner.user_id)),
    )
    .await
    .unwrap()
    .into_response();
    let second = register(
        State(test.state()),
        Json(ngo_payload("Second", owner.user_id)),
    )
    .await
    .unwrap()
    .into_response();

    let first: RegisteredDto = read_json(first).await;
    let second: RegisteredDto = read_json(second).await;

    let first_id = first.cause_id.unwrap();
    let second_id = second.cause_id.unwrap();

    assert_ne!(first_id, second_id);
    assert_eq!(first_id % 2, 0);
    assert_eq!(second_id % 2, 0);

    Ok(())
}
