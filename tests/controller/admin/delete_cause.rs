use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
use servia::controller::admin::delete_cause;
use servia_test_utils::prelude::*;

use crate::controller::admin::login_as_admin;

#[tokio::test]
// Deleting a cause removes its auth row, subtype, and dependents
async fn removes_cause_and_dependents() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;
    let db = &test.state.db;

    let (_, owner) = fixtures::create_user(db, "Alice", true).await?;
    let (cause_auth, cause, _) =
        fixtures::create_ngo_cause(db, owner.user_id, 2, "CleanBeach", true).await?;
    fixtures::create_location(db, cause.cause_id, 38.7, -9.1).await?;

    let contact = entity::cause_contact::ActiveModel {
        contact: ActiveValue::Set("+351 000 000".to_string()),
        cause_id: ActiveValue::Set(cause.cause_id),
        ..Default::default()
    };
    contact.insert(db).await?;

    let result = delete_cause(
        State(test.state()),
        test.session.clone(),
        Path(cause.cause_id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(entity::prelude::Cause::find_by_id(cause.cause_id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::AuthData::find_by_id(cause_auth.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Ngo::find().all(db).await?.is_empty());
    assert!(entity::prelude::Location::find().all(db).await?.is_empty());
    assert!(entity::prelude::CauseContact::find().all(db).await?.is_empty());

    // The owner survives a cause deletion.
    assert!(entity::prelude::User::find_by_id(owner.user_id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

#[tokio::test]
// A missing cause yields 404
async fn not_found_for_missing_cause() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    login_as_admin(&test).await;

    let result = delete_cause(State(test.state()), test.session.clone(), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
