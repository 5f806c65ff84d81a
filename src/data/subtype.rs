//! Repositories for the NGO and event subtype rows attached to causes.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct NgoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NgoRepository<'a, C> {
    /// Creates a new instance of [`NgoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the NGO subtype row for a cause
    pub async fn create(
        &self,
        cause_id: i32,
        year_est: Option<i32>,
        age: Option<i32>,
    ) -> Result<entity::ngo::Model, DbErr> {
        let ngo = entity::ngo::ActiveModel {
            cause_id: ActiveValue::Set(cause_id),
            year_est: ActiveValue::Set(year_est),
            age: ActiveValue::Set(age),
            ..Default::default()
        };

        ngo.insert(self.db).await
    }

    /// Gets the NGO subtype row for a cause
    pub async fn get_by_cause_id(
        &self,
        cause_id: i32,
    ) -> Result<Option<entity::ngo::Model>, DbErr> {
        entity::prelude::Ngo::find()
            .filter(entity::ngo::Column::CauseId.eq(cause_id))
            .one(self.db)
            .await
    }

    /// Gets all NGO subtype rows
    pub async fn get_all(&self) -> Result<Vec<entity::ngo::Model>, DbErr> {
        entity::prelude::Ngo::find().all(self.db).await
    }
}

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the event subtype row for a cause
    pub async fn create(
        &self,
        cause_id: i32,
        capacity: Option<i32>,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        ngo_id: Option<i32>,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            capacity: ActiveValue::Set(capacity),
            date: ActiveValue::Set(date),
            time: ActiveValue::Set(time),
            cause_id: ActiveValue::Set(cause_id),
            ngo_id: ActiveValue::Set(ngo_id),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    /// Gets the event subtype row for a cause
    pub async fn get_by_cause_id(
        &self,
        cause_id: i32,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::CauseId.eq(cause_id))
            .one(self.db)
            .await
    }

    /// Gets all event subtype rows
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find().all(self.db).await
    }
}
