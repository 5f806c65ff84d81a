use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user profile linked to an auth record
    pub async fn create(
        &self,
        auth_id: i32,
        name: &str,
        email: Option<String>,
        age: Option<i32>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email),
            age: ActiveValue::Set(age),
            verified: ActiveValue::Set(false),
            auth_id: ActiveValue::Set(auth_id),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by its ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets a user by the auth record that owns it
    pub async fn get_by_auth_id(&self, auth_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::AuthId.eq(auth_id))
            .one(self.db)
            .await
    }

    /// Gets all users together with their auth records
    pub async fn get_all_with_auth(
        &self,
    ) -> Result<Vec<(entity::user::Model, Option<entity::auth_data::Model>)>, DbErr> {
        entity::prelude::User::find()
            .find_also_related(entity::auth_data::Entity)
            .all(self.db)
            .await
    }

    /// Sets the verified flag on the user linked to an auth record
    ///
    /// Returns None when no user profile is linked to the auth record.
    pub async fn set_verified_by_auth_id(
        &self,
        auth_id: i32,
        verified: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get_by_auth_id(auth_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.verified = ActiveValue::Set(verified);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
