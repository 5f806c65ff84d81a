//! Fixture factories for seeding test databases.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub const TEST_PASSWORD: &str = "correct-horse";

/// Low bcrypt cost keeps the test suite fast.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, 4)
}

/// Insert an `auth_data` row with [`TEST_PASSWORD`] as the credential.
pub async fn create_auth(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
    verified: bool,
) -> Result<entity::auth_data::Model, TestError> {
    let auth = entity::auth_data::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        role: ActiveValue::Set(role.to_string()),
        password_hash: ActiveValue::Set(hash_password(TEST_PASSWORD)?),
        verified: ActiveValue::Set(verified),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(auth.insert(db).await?)
}

/// Insert an auth row plus its linked user profile.
pub async fn create_user(
    db: &DatabaseConnection,
    name: &str,
    verified: bool,
) -> Result<(entity::auth_data::Model, entity::user::Model), TestError> {
    let auth = create_auth(db, name, "user", verified).await?;

    let user = entity::user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        verified: ActiveValue::Set(verified),
        auth_id: ActiveValue::Set(auth.id),
        ..Default::default()
    };
    let user = user.insert(db).await?;

    Ok((auth, user))
}

/// Insert an auth row, a cause owned by `owner_user_id`, and its NGO subtype row.
pub async fn create_ngo_cause(
    db: &DatabaseConnection,
    owner_user_id: i32,
    cause_id: i32,
    name: &str,
    verified: bool,
) -> Result<
    (
        entity::auth_data::Model,
        entity::cause::Model,
        entity::ngo::Model,
    ),
    TestError,
> {
    let auth = create_auth(db, name, "ngo", verified).await?;

    let cause = entity::cause::ActiveModel {
        cause_id: ActiveValue::Set(cause_id),
        name: ActiveValue::Set(name.to_string()),
        if_online: ActiveValue::Set(false),
        verified: ActiveValue::Set(verified),
        user_id: ActiveValue::Set(owner_user_id),
        auth_id: ActiveValue::Set(auth.id),
        ..Default::default()
    };
    let cause = cause.insert(db).await?;

    let ngo = entity::ngo::ActiveModel {
        cause_id: ActiveValue::Set(cause.cause_id),
        year_est: ActiveValue::Set(Some(2015)),
        ..Default::default()
    };
    let ngo = ngo.insert(db).await?;

    Ok((auth, cause, ngo))
}

/// Insert an auth row, a cause owned by `owner_user_id`, and its event subtype row.
pub async fn create_event_cause(
    db: &DatabaseConnection,
    owner_user_id: i32,
    cause_id: i32,
    name: &str,
    verified: bool,
) -> Result<
    (
        entity::auth_data::Model,
        entity::cause::Model,
        entity::event::Model,
    ),
    TestError,
> {
    let auth = create_auth(db, name, "event", verified).await?;

    let cause = entity::cause::ActiveModel {
        cause_id: ActiveValue::Set(cause_id),
        name: ActiveValue::Set(name.to_string()),
        if_online: ActiveValue::Set(false),
        verified: ActiveValue::Set(verified),
        user_id: ActiveValue::Set(owner_user_id),
        auth_id: ActiveValue::Set(auth.id),
        ..Default::default()
    };
    let cause = cause.insert(db).await?;

    let event = entity::event::ActiveModel {
        capacity: ActiveValue::Set(Some(100)),
        cause_id: ActiveValue::Set(cause.cause_id),
        ..Default::default()
    };
    let event = event.insert(db).await?;

    Ok((auth, cause, event))
}

/// Attach a location row to a cause.
pub async fn create_location(
    db: &DatabaseConnection,
    cause_id: i32,
    latitude: f64,
    longitude: f64,
) -> Result<entity::location::Model, TestError> {
    let location = entity::location::ActiveModel {
        country: ActiveValue::Set(Some("Portugal".to_string())),
        city: ActiveValue::Set(Some("Lisbon".to_string())),
        latitude: ActiveValue::Set(Some(latitude)),
        longitude: ActiveValue::Set(Some(longitude)),
        cause_id: ActiveValue::Set(cause_id),
        ..Default::default()
    };

    Ok(location.insert(db).await?)
}
