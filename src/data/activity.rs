//! Repositories for activity records linking users to causes.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    /// Creates a new instance of [`DonationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a donation from a user to a cause
    pub async fn create(
        &self,
        user_id: i32,
        cause_id: i32,
        amount: f64,
    ) -> Result<entity::donation::Model, DbErr> {
        let donation = entity::donation::ActiveModel {
            amount: ActiveValue::Set(amount),
            user_id: ActiveValue::Set(user_id),
            cause_id: ActiveValue::Set(cause_id),
            ..Default::default()
        };

        donation.insert(self.db).await
    }

    /// Gets all donations made to a cause
    pub async fn get_by_cause_id(
        &self,
        cause_id: i32,
    ) -> Result<Vec<entity::donation::Model>, DbErr> {
        entity::prelude::Donation::find()
            .filter(entity::donation::Column::CauseId.eq(cause_id))
            .all(self.db)
            .await
    }

    /// Gets all donations made by a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::donation::Model>, DbErr> {
        entity::prelude::Donation::find()
            .filter(entity::donation::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}

pub struct FeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    /// Creates a new instance of [`FeedbackRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records feedback from a user on a cause
    pub async fn create(
        &self,
        user_id: i32,
        cause_id: i32,
        comment: Option<String>,
        rating: Option<i32>,
    ) -> Result<entity::feedback::Model, DbErr> {
        let feedback = entity::feedback::ActiveModel {
            comment: ActiveValue::Set(comment),
            rating: ActiveValue::Set(rating),
            user_id: ActiveValue::Set(user_id),
            cause_id: ActiveValue::Set(cause_id),
            ..Default::default()
        };

        feedback.insert(self.db).await
    }

    /// Gets all feedback left on a cause
    pub async fn get_by_cause_id(
        &self,
        cause_id: i32,
    ) -> Result<Vec<entity::feedback::Model>, DbErr> {
        entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::CauseId.eq(cause_id))
            .all(self.db)
            .await
    }
}

pub struct VolunteerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VolunteerRepository<'a, C> {
    /// Creates a new instance of [`VolunteerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a user volunteering for a cause
    pub async fn create(
        &self,
        user_id: i32,
        cause_id: i32,
    ) -> Result<entity::volunteer::Model, DbErr> {
        let volunteer = entity::volunteer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            cause_id: ActiveValue::Set(cause_id),
            ..Default::default()
        };

        volunteer.insert(self.db).await
    }

    /// Gets all volunteer records for a cause
    pub async fn get_by_cause_id(
        &self,
        cause_id: i32,
    ) -> Result<Vec<entity::volunteer::Model>, DbErr> {
        entity::prelude::Volunteer::find()
            .filter(entity::volunteer::Column::CauseId.eq(cause_id))
            .all(self.db)
            .await
    }
}
