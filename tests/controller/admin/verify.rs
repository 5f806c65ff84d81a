use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use servia::{
    controller::admin::{unverify, verify},
    model::{role::Role, session::auth::SessionAuth},
};
use servia_test_utils::prelude::*;

use crate::controller::admin::login_as_admin;

#[tokio::test]
// Verifying an auth record mirrors the flag onto the user profile
async fn mirrors_flag_onto_user_profile() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    let (auth, user) = fixtures::create_user(&test.state.db, "Alice", false).await?;

    let result = verify(State(test.state()), test.session.clone(), Path(auth.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let auth = entity::prelude::AuthData::find_by_id(auth.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    let user = entity::prelude::User::find_by_id(user.user_id)
        .one(&test.state.db)
        .await?
        .unwrap();

    assert!(auth.verified);
    assert_eq!(user.verified, auth.verified);

    Ok(())
}

#[tokio::test]
// Unverifying mirrors the flag back off the cause profile
async fn mirrors_flag_onto_cause_profile() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    let (_, owner) = fixtures::create_user(&test.state.db, "Alice", true).await?;
    let (cause_auth, cause, _) =
        fixtures::create_ngo_cause(&test.state.db, owner.user_id, 2, "CleanBeach", true).await?;

    let result = unverify(
        State(test.state()),
        test.session.clone(),
        Path(cause_auth.id),
    )
    .await;

    assert!(result.is_ok());

    let cause_auth = entity::prelude::AuthData::find_by_id(cause_auth.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    let cause = entity::prelude::Cause::find_by_id(cause.cause_id)
        .one(&test.state.db)
        .await?
        .unwrap();

    assert!(!cause_auth.verified);
    assert_eq!(cause.verified, cause_auth.verified);

    Ok(())
}

#[tokio::test]
// A missing auth record yields 404
async fn not_found_for_missing_auth() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    let result = verify(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
// A non-admin session is rejected with 403
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    SessionAuth::insert(&test.session, 1, Role::User).await.unwrap();

    let result = verify(State(test.state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
