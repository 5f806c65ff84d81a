use sea_orm::DatabaseConnection;

use crate::{
    data::{CauseRepository, DonationRepository, FeedbackRepository, UserRepository,
        VolunteerRepository},
    error::{activity::ActivityError, auth::AuthError, Error},
    model::{role::Role, session::auth::SessionAuth},
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    /// Creates a new instance of [`ActivityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a donation from the logged-in user to a verified cause
    pub async fn donate(
        &self,
        auth: SessionAuth,
        cause_id: i32,
        amount: f64,
    ) -> Result<entity::donation::Model, Error> {
        if amount <= 0.0 {
            return Err(ActivityError::InvalidAmount.into());
        }

        let user = self.acting_user(auth).await?;
        let cause = self.verified_cause(cause_id).await?;

        Ok(DonationRepository::new(self.db)
            .create(user.user_id, cause.cause_id, amount)
            .await?)
    }

    /// Records feedback from the logged-in user on a verified cause
    pub async fn leave_feedback(
        &self,
        auth: SessionAuth,
        cause_id: i32,
        comment: Option<String>,
        rating: Option<i32>,
    ) -> Result<entity::feedback::Model, Error> {
        if let Some(rating) = rating {
            if !(1..=5).contains(&rating) {
                return Err(ActivityError::InvalidRating.into());
            }
        }

        let user = self.acting_user(auth).await?;
        let cause = self.verified_cause(cause_id).await?;

        Ok(FeedbackRepository::new(self.db)
            .create(user.user_id, cause.cause_id, comment, rating)
            .await?)
    }

    /// Records the logged-in user volunteering for a verified cause
    pub async fn volunteer(
        &self,
        auth: SessionAuth,
        cause_id: i32,
    ) -> Result<entity::volunteer::Model, Error> {
        let user = self.acting_user(auth).await?;
        let cause = self.verified_cause(cause_id).await?;

        Ok(VolunteerRepository::new(self.db)
            .create(user.user_id, cause.cause_id)
            .await?)
    }

    /// Resolves the user profile acting in this session.
    ///
    /// Only donor accounts can record activity; NGO, event, and admin
    /// identities have no user profile to attach the record to.
    async fn acting_user(&self, auth: SessionAuth) -> Result<entity::user::Model, Error> {
        if auth.role != Role::User {
            return Err(ActivityError::UserRoleRequired(auth.role.to_string()).into());
        }

        UserRepository::new(self.db)
            .get_by_auth_id(auth.auth_id)
            .await?
            .ok_or_else(|| Error::from(AuthError::IdentityNotInDatabase(auth.auth_id)))
    }

    async fn verified_cause(&self, cause_id: i32) -> Result<entity::cause::Model, Error> {
        let cause = CauseRepository::new(self.db)
            .get_by_id(cause_id)
            .await?
            .ok_or(Error::NotFound("cause"))?;

        if !cause.verified {
            return Err(ActivityError::CauseNotVerified(cause.cause_id).into());
        }

        Ok(cause)
    }
}
