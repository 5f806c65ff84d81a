use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use servia::{controller::cause::get_cause, model::api::CauseDetailDto};
use servia_test_utils::prelude::*;

use crate::controller::read_json;

#[tokio::test]
// The detail view carries the full location list
async fn returns_full_location_list() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let db = &test.state.db;

    let (_, owner) = fixtures::create_user(db, "Alice", true).await?;
    let (_, cause, _) = fixtures::create_event_cause(db, owner.user_id, 1, "ParkRun", true).await?;
    fixtures::create_location(db, cause.cause_id, 38.7, -9.1).await?;
    fixtures::create_location(db, cause.cause_id, 41.1, -8.6).await?;

    let result = get_cause(State(test.state()), Path(cause.cause_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: CauseDetailDto = read_json(resp).await;

    assert_eq!(detail.locations.len(), 2);
    assert_eq!(detail.summary.name, "ParkRun");
    assert_eq!(detail.summary.capacity, Some(100));

    Ok(())
}

#[tokio::test]
// A missing cause yields 404
async fn not_found_for_missing_cause() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let result = get_cause(State(test.state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
// An unverified cause is hidden from the public detail view
async fn not_found_for_unverified_cause() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;

    let (_, owner) = fixtures::create_user(&test.state.db, "Alice", true).await?;
    let (_, cause, _) =
        fixtures::create_ngo_cause(&test.state.db, owner.user_id, 2, "Pending", false).await?;

    let result = get_cause(State(test.state()), Path(cause.cause_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
