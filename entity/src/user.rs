//! Donor/volunteer profile, linked 1:1 to its `auth_data` row.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub name: String,
    #[sea_orm(unique, nullable)]
    pub email: Option<String>,
    pub age: Option<i32>,
    pub verified: bool,
    #[sea_orm(unique)]
    pub auth_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_data::Entity",
        from = "Column::AuthId",
        to = "super::auth_data::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AuthData,
    #[sea_orm(has_many = "super::cause::Entity")]
    Causes,
    #[sea_orm(has_many = "super::user_contact::Entity")]
    Contacts,
    #[sea_orm(has_many = "super::user_social::Entity")]
    Socials,
    #[sea_orm(has_many = "super::account_details::Entity")]
    AccountDetails,
    #[sea_orm(has_many = "super::donation::Entity")]
    Donations,
    #[sea_orm(has_many = "super::feedback::Entity")]
    Feedbacks,
    #[sea_orm(has_many = "super::volunteer::Entity")]
    Volunteers,
}

impl Related<super::auth_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthData.def()
    }
}

impl Related<super::cause::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Causes.def()
    }
}

impl Related<super::user_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl Related<super::user_social::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Socials.def()
    }
}

impl Related<super::account_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountDetails.def()
    }
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donations.def()
    }
}

impl Related<super::feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedbacks.def()
    }
}

impl Related<super::volunteer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Volunteers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
