use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect,
};

/// Column values for a new cause row.
pub struct NewCause {
    pub cause_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub email: Option<String>,
    pub if_online: bool,
    pub user_id: i32,
    pub auth_id: i32,
}

pub struct CauseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CauseRepository<'a, C> {
    /// Creates a new instance of [`CauseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new cause row with an explicitly assigned id
    pub async fn create(&self, new: NewCause) -> Result<entity::cause::Model, DbErr> {
        let cause = entity::cause::ActiveModel {
            cause_id: ActiveValue::Set(new.cause_id),
            name: ActiveValue::Set(new.name),
            description: ActiveValue::Set(new.description),
            logo: ActiveValue::Set(new.logo),
            email: ActiveValue::Set(new.email),
            if_online: ActiveValue::Set(new.if_online),
            verified: ActiveValue::Set(false),
            user_id: ActiveValue::Set(new.user_id),
            auth_id: ActiveValue::Set(new.auth_id),
        };

        cause.insert(self.db).await
    }

    /// Gets a cause by its ID
    pub async fn get_by_id(&self, cause_id: i32) -> Result<Option<entity::cause::Model>, DbErr> {
        entity::prelude::Cause::find_by_id(cause_id)
            .one(self.db)
            .await
    }

    /// Gets a cause by the auth record that owns it
    pub async fn get_by_auth_id(
        &self,
        auth_id: i32,
    ) -> Result<Option<entity::cause::Model>, DbErr> {
        entity::prelude::Cause::find()
            .filter(entity::cause::Column::AuthId.eq(auth_id))
            .one(self.db)
            .await
    }

    /// Gets every cause regardless of verification state
    pub async fn get_all(&self) -> Result<Vec<entity::cause::Model>, DbErr> {
        entity::prelude::Cause::find().all(self.db).await
    }

    /// Gets only causes verified by an admin
    pub async fn get_verified(&self) -> Result<Vec<entity::cause::Model>, DbErr> {
        entity::prelude::Cause::find()
            .filter(entity::cause::Column::Verified.eq(true))
            .all(self.db)
            .await
    }

    /// Gets every cause owned by a user
    pub async fn get_owned_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::cause::Model>, DbErr> {
        entity::prelude::Cause::find()
            .filter(entity::cause::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Sets the verified flag on the cause linked to an auth record
    ///
    /// Returns None when no cause is linked to the auth record.
    pub async fn set_verified_by_auth_id(
        &self,
        auth_id: i32,
        verified: bool,
    ) -> Result<Option<entity::cause::Model>, DbErr> {
        let cause = match self.get_by_auth_id(auth_id).await? {
            Some(cause) => cause,
            None => return Ok(None),
        };

        let mut cause_am = cause.into_active_model();
        cause_am.verified = ActiveValue::Set(verified);

        let cause = cause_am.update(self.db).await?;

        Ok(Some(cause))
    }

    /// Computes the next cause id of the requested parity
    ///
    /// NGO causes use even ids and events odd ids; the result is the current
    /// maximum of that parity plus two, or 2/1 when none exist yet. Callers
    /// must be prepared for a unique constraint violation on insert since two
    /// registrations can observe the same maximum.
    pub async fn next_id(&self, is_ngo: bool) -> Result<i32, DbErr> {
        let parity = if is_ngo { 0 } else { 1 };

        let max_id: Option<Option<i32>> = entity::prelude::Cause::find()
            .select_only()
            .column_as(entity::cause::Column::CauseId.max(), "max_id")
            .filter(
                Expr::col(entity::cause::Column::CauseId)
                    .modulo(2)
                    .eq(parity),
            )
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(match max_id.flatten() {
            Some(max) => max + 2,
            None if is_ngo => 2,
            None => 1,
        })
    }

    /// Gets all locations attached to a cause
    pub async fn locations(&self, cause_id: i32) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::CauseId.eq(cause_id))
            .all(self.db)
            .await
    }

    /// Gets all contact strings attached to a cause
    pub async fn contacts(&self, cause_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::CauseContact::find()
            .filter(entity::cause_contact::Column::CauseId.eq(cause_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|c| c.contact).collect())
    }

    /// Gets all social handles attached to a cause
    pub async fn socials(&self, cause_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::CauseSocial::find()
            .filter(entity::cause_social::Column::CauseId.eq(cause_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|s| s.social).collect())
    }
}
