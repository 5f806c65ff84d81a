use axum::{http::StatusCode, response::IntoResponse};
use servia::{
    controller::auth::logout,
    model::{role::Role, session::auth::SessionAuth},
};
use servia_test_utils::prelude::*;

#[tokio::test]
// Logging out clears the stored identity
async fn clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    SessionAuth::insert(&test.session, 1, Role::User).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_auth = SessionAuth::get(&test.session).await.unwrap();
    assert!(session_auth.is_none());

    Ok(())
}

#[tokio::test]
// Logging out without a session is still a 200
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
