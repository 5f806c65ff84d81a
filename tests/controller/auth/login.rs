use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use servia::{
    controller::auth::{login, LoginPayload},
    model::session::auth::SessionAuth,
};
use servia_test_utils::prelude::*;

fn login_payload(name: &str, password: &str) -> LoginPayload {
    LoginPayload {
        name: Some(name.to_string()),
        password: Some(password.to_string()),
    }
}

#[tokio::test]
// A verified account logs in and the identity lands in the session
async fn stores_identity_in_session() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let auth = fixtures::create_auth(&test.state.db, "Alice", "user", true).await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(login_payload("Alice", fixtures::TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_auth = SessionAuth::get(&test.session).await.unwrap();
    assert!(session_auth.is_some());
    assert_eq!(session_auth.unwrap().auth_id, auth.id);

    Ok(())
}

#[tokio::test]
// A wrong password is rejected with 401
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    fixtures::create_auth(&test.state.db, "Alice", "user", true).await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(login_payload("Alice", "not-the-password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
// An unknown name is rejected with the same 401 as a wrong password
async fn rejects_unknown_name() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(login_payload("Nobody", fixtures::TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
// An account awaiting verification is rejected with 403
async fn rejects_unverified_account() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    fixtures::create_auth(&test.state.db, "Alice", "user", false).await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(login_payload("Alice", fixtures::TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
// A missing password field is rejected with 400
async fn rejects_missing_password() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        Json(LoginPayload {
            name: Some("Alice".to_string()),
            password: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
