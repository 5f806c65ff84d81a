use axum::{extract::State, http::StatusCode, response::IntoResponse};
use servia::{
    controller::admin::{get_causes, get_users},
    model::api::{AdminCauseDto, AdminUserDto, CauseType},
};
use servia_test_utils::prelude::*;

use crate::controller::{admin::login_as_admin, read_json};

#[tokio::test]
// The user list carries the auth role next to the profile flags
async fn lists_users_with_roles() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    fixtures::create_user(&test.state.db, "Alice", true).await?;
    fixtures::create_user(&test.state.db, "Bob", false).await?;

    let result = get_users(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let mut users: Vec<AdminUserDto> = read_json(resp).await;
    users.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].role, "user");
    assert!(users[0].verified);
    assert!(!users[1].verified);

    Ok(())
}

#[tokio::test]
// The cause list includes unverified causes and derived subtypes
async fn lists_causes_with_types() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    let (_, owner) = fixtures::create_user(&test.state.db, "Alice", true).await?;
    fixtures::create_ngo_cause(&test.state.db, owner.user_id, 2, "CleanBeach", true).await?;
    fixtures::create_event_cause(&test.state.db, owner.user_id, 1, "ParkRun", false).await?;

    let result = get_causes(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();

    let mut causes: Vec<AdminCauseDto> = read_json(resp).await;
    causes.sort_by_key(|c| c.cause_id);

    assert_eq!(causes.len(), 2);
    assert_eq!(causes[0].cause_type, CauseType::Event);
    assert!(!causes[0].verified);
    assert_eq!(causes[1].cause_type, CauseType::Ngo);
    assert!(causes[1].verified);

    Ok(())
}

#[tokio::test]
// Anonymous sessions cannot read admin lists
async fn rejects_anonymous_session() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = get_users(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
