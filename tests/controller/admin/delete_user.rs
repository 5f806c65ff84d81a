use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
use servia::controller::admin::delete_user;
use servia_test_utils::prelude::*;

use crate::controller::admin::login_as_admin;

#[tokio::test]
// Deleting a user removes every owned cause and all dependent rows
async fn removes_owned_causes_and_dependents() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;
    let db = &test.state.db;

    let (user_auth, user) = fixtures::create_user(db, "Alice", true).await?;
    let (ngo_auth, ngo_cause, _) =
        fixtures::create_ngo_cause(db, user.user_id, 2, "CleanBeach", true).await?;
    let (event_auth, event_cause, _) =
        fixtures::create_event_cause(db, user.user_id, 1, "ParkRun", true).await?;
    fixtures::create_location(db, ngo_cause.cause_id, 38.7, -9.1).await?;

    let donation = entity::donation::ActiveModel {
        amount: ActiveValue::Set(25.0),
        user_id: ActiveValue::Set(user.user_id),
        cause_id: ActiveValue::Set(event_cause.cause_id),
        ..Default::default()
    };
    donation.insert(db).await?;

    let volunteer = entity::volunteer::ActiveModel {
        user_id: ActiveValue::Set(user.user_id),
        cause_id: ActiveValue::Set(ngo_cause.cause_id),
        ..Default::default()
    };
    volunteer.insert(db).await?;

    let contact = entity::user_contact::ActiveModel {
        contact: ActiveValue::Set("+351 000 000".to_string()),
        user_id: ActiveValue::Set(user.user_id),
        ..Default::default()
    };
    contact.insert(db).await?;

    let account = entity::account_details::ActiveModel {
        iban: ActiveValue::Set(Some("PT50000201231234567890154".to_string())),
        acc_name: ActiveValue::Set(Some("Alice".to_string())),
        user_id: ActiveValue::Set(Some(user.user_id)),
        cause_id: ActiveValue::Set(None),
        ..Default::default()
    };
    account.insert(db).await?;

    let result = delete_user(
        State(test.state()),
        test.session.clone(),
        Path(user.user_id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    // Root rows gone.
    assert!(entity::prelude::User::find_by_id(user.user_id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::AuthData::find_by_id(user_auth.id)
        .one(db)
        .await?
        .is_none());

    // Owned causes and their auth rows gone.
    for (auth_id, cause_id) in [
        (ngo_auth.id, ngo_cause.cause_id),
        (event_auth.id, event_cause.cause_id),
    ] {
        assert!(entity::prelude::AuthData::find_by_id(auth_id)
            .one(db)
            .await?
            .is_none());
        assert!(entity::prelude::Cause::find_by_id(cause_id)
            .one(db)
            .await?
            .is_none());
    }

    // No orphan dependents anywhere.
    assert!(entity::prelude::Ngo::find().all(db).await?.is_empty());
    assert!(entity::prelude::Event::find().all(db).await?.is_empty());
    assert!(entity::prelude::Location::find().all(db).await?.is_empty());
    assert!(entity::prelude::Donation::find().all(db).await?.is_empty());
    assert!(entity::prelude::Volunteer::find().all(db).await?.is_empty());
    assert!(entity::prelude::UserContact::find().all(db).await?.is_empty());
    assert!(entity::prelude::AccountDetails::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
// A missing user yields 404
async fn not_found_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    let result = delete_user(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
// Deleting one user leaves other users' data untouched
async fn leaves_other_users_alone() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;
    let db = &test.state.db;

    let (_, alice) = fixtures::create_user(db, "Alice", true).await?;
    let (_, bob) = fixtures::create_user(db, "Bob", true).await?;
    let (_, bob_cause, _) = fixtures::create_ngo_cause(db, bob.user_id, 2, "BobsNgo", true).await?;

    delete_user(State(test.state()), test.session.clone(), Path(alice.user_id))
        .await
        .unwrap();

    assert!(entity::prelude::User::find_by_id(bob.user_id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Cause::find_by_id(bob_cause.cause_id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
