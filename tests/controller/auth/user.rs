use axum::{extract::State, http::StatusCode, response::IntoResponse};
use servia::{
    controller::auth::get_user,
    model::{api::SessionIdentityDto, role::Role, session::auth::SessionAuth},
};
use servia_test_utils::prelude::*;

use crate::controller::read_json;

#[tokio::test]
// The session identity is returned for a logged-in account
async fn returns_session_identity() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let auth = fixtures::create_auth(&test.state.db, "Alice", "user", true).await?;
    SessionAuth::insert(&test.session, auth.id, Role::User).await.unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let identity: SessionIdentityDto = read_json(resp).await;
    assert_eq!(identity.auth_id, auth.id);
    assert_eq!(identity.name, "Alice");
    assert!(identity.verified);

    Ok(())
}

#[tokio::test]
// 404 when no identity is stored in the session
async fn not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
// A stale session pointing at a deleted auth record is cleared
async fn clears_stale_session() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    SessionAuth::insert(&test.session, 999, Role::User).await.unwrap();

    let result = get_user(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_auth = SessionAuth::get(&test.session).await.unwrap();
    assert!(session_auth.is_none());

    Ok(())
}
