use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use servia::{
    controller::{admin, auth},
    model::api::{CauseSummaryDto, CauseType, RegisteredDto},
};
use servia_test_utils::prelude::*;

use crate::controller::{admin::login_as_admin, auth::ngo_payload, auth::user_payload, read_json};

#[tokio::test]
// Unverified causes never appear in the public listing
async fn hides_unverified_causes() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (_, owner) = fixtures::create_user(&test.state.db, "Alice", true).await?;
    fixtures::create_ngo_cause(&test.state.db, owner.user_id, 2, "Visible", true).await?;
    fixtures::create_ngo_cause(&test.state.db, owner.user_id, 4, "Hidden", false).await?;

    let result = servia::controller::cause::list_causes(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let causes: Vec<CauseSummaryDto> = read_json(resp).await;

    assert_eq!(causes.len(), 1);
    assert_eq!(causes[0].name, "Visible");

    Ok(())
}

#[tokio::test]
// Full lifecycle: register user, verify, register ngo, verify, list
async fn registered_and_verified_ngo_appears_in_listing() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    // Register the donor account.
    let resp = auth::register(State(test.state()), Json(user_payload("Alice")))
        .await
        .unwrap()
        .into_response();
    let alice: RegisteredDto = read_json(resp).await;

    // Admin verifies the donor.
    admin::verify(
        State(test.state()),
        test.session.clone(),
        Path(alice.auth_id),
    )
    .await
    .unwrap();

    // Register the NGO owned by the donor.
    let resp = auth::register(
        State(test.state()),
        Json(ngo_payload("CleanBeach", alice.user_id.unwrap())),
    )
    .await
    .unwrap()
    .into_response();
    let ngo: RegisteredDto = read_json(resp).await;

    // Admin verifies the NGO.
    admin::verify(State(test.state()), test.session.clone(), Path(ngo.auth_id))
        .await
        .unwrap();

    let resp = servia::controller::cause::list_causes(State(test.state()))
        .await
        .unwrap()
        .into_response();
    let causes: Vec<CauseSummaryDto> = read_json(resp).await;

    assert_eq!(causes.len(), 1);
    assert_eq!(causes[0].name, "CleanBeach");
    assert_eq!(causes[0].cause_type, CauseType::Ngo);
    assert_eq!(causes[0].cause_id, ngo.cause_id.unwrap());

    Ok(())
}

#[tokio::test]
// The listing flattens coordinates, contacts, and subtype fields
async fn flattens_related_rows() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let db = &test.state.db;

    let (_, owner) = fixtures::create_user(db, "Alice", true).await?;
    let (_, cause, _) = fixtures::create_ngo_cause(db, owner.user_id, 2, "CleanBeach", true).await?;
    fixtures::create_location(db, cause.cause_id, 38.7, -9.1).await?;

    let contact = entity::cause_contact::ActiveModel {
        contact: sea_orm::ActiveValue::Set("info@cleanbeach.org".to_string()),
        cause_id: sea_orm::ActiveValue::Set(cause.cause_id),
        ..Default::default()
    };
    sea_orm::ActiveModelTrait::insert(contact, db).await?;

    let resp = servia::controller::cause::list_causes(State(test.state()))
        .await
        .unwrap()
        .into_response();
    let causes: Vec<CauseSummaryDto> = read_json(resp).await;

    assert_eq!(causes.len(), 1);
    let summary = &causes[0];

    assert_eq!(summary.latitude, Some(38.7));
    assert_eq!(summary.longitude, Some(-9.1));
    assert_eq!(summary.contacts, vec!["info@cleanbeach.org".to_string()]);
    assert_eq!(summary.year_est, Some(2015));

    Ok(())
}
