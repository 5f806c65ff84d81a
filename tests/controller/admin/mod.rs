mod delete_cause;
mod delete_user;
mod lists;
mod verify;

use servia_test_utils::TestSetup;
use servia::model::{role::Role, session::auth::SessionAuth};

/// Stores an admin identity in the test session.
pub async fn login_as_admin(test: &TestSetup) {
    let admin = servia_test_utils::fixtures::create_auth(&test.state.db, "admin", "admin", true)
        .await
        .expect("failed to create admin fixture");

    SessionAuth::insert(&test.session, admin.id, Role::Admin)
        .await
        .expect("failed to store admin session");
}
