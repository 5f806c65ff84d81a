use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct AuthRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthRepository<'a, C> {
    /// Creates a new instance of [`AuthRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new auth record
    ///
    /// The `name` column carries a uniqueness constraint; inserting a
    /// duplicate surfaces as a unique constraint violation.
    pub async fn create(
        &self,
        name: &str,
        role: &str,
        password_hash: &str,
        verified: bool,
    ) -> Result<entity::auth_data::Model, DbErr> {
        let auth = entity::auth_data::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            role: ActiveValue::Set(role.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            verified: ActiveValue::Set(verified),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        auth.insert(self.db).await
    }

    /// Gets an auth record by its ID
    pub async fn get_by_id(&self, auth_id: i32) -> Result<Option<entity::auth_data::Model>, DbErr> {
        entity::prelude::AuthData::find_by_id(auth_id)
            .one(self.db)
            .await
    }

    /// Gets an auth record by its unique name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::auth_data::Model>, DbErr> {
        entity::prelude::AuthData::find()
            .filter(entity::auth_data::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Sets the verified flag on an auth record
    ///
    /// Returns None when the record does not exist.
    pub async fn set_verified(
        &self,
        auth_id: i32,
        verified: bool,
    ) -> Result<Option<entity::auth_data::Model>, DbErr> {
        let auth = match self.get_by_id(auth_id).await? {
            Some(auth) => auth,
            None => return Ok(None),
        };

        let mut auth_am = auth.into_active_model();
        auth_am.verified = ActiveValue::Set(verified);

        let auth = auth_am.update(self.db).await?;

        Ok(Some(auth))
    }

    /// Deletes an auth record
    ///
    /// Declared cascades remove the linked profile row and everything under
    /// it. Returns OK regardless of the record existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, auth_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AuthData::delete_by_id(auth_id)
            .exec(self.db)
            .await
    }
}
