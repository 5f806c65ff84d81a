mod login;
mod logout;
mod register;
mod user;

use servia::controller::auth::RegisterPayload;

/// Payload with every optional field empty.
pub fn empty_payload() -> RegisterPayload {
    RegisterPayload {
        name: None,
        password: None,
        role: None,
        email: None,
        age: None,
        user_id: None,
        description: None,
        logo: None,
        if_online: None,
        year_est: None,
        capacity: None,
        date: None,
        time: None,
        ngo_id: None,
    }
}

pub fn user_payload(name: &str) -> RegisterPayload {
    RegisterPayload {
        name: Some(name.to_string()),
        password: Some(servia_test_utils::fixtures::TEST_PASSWORD.to_string()),
        role: Some("user".to_string()),
        ..empty_payload()
    }
}

pub fn ngo_payload(name: &str, owner_user_id: i32) -> RegisterPayload {
    RegisterPayload {
        name: Some(name.to_string()),
        password: Some(servia_test_utils::fixtures::TEST_PASSWORD.to_string()),
        role: Some("ngo".to_string()),
        user_id: Some(owner_user_id),
        year_est: Some(2015),
        ..empty_payload()
    }
}
