//! Public-facing NGO or Event profile owned by a verified user.
//!
//! `cause_id` is assigned by the registration workflow (even ids for NGOs,
//! odd ids for events), so the column is a non-auto-increment primary key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cause")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cause_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub logo: Option<String>,
    pub email: Option<String>,
    pub if_online: bool,
    pub verified: bool,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub auth_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::auth_data::Entity",
        from = "Column::AuthId",
        to = "super::auth_data::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AuthData,
    #[sea_orm(has_one = "super::ngo::Entity")]
    Ngo,
    #[sea_orm(has_one = "super::event::Entity")]
    Event,
    #[sea_orm(has_many = "super::location::Entity")]
    Locations,
    #[sea_orm(has_many = "super::cause_contact::Entity")]
    Contacts,
    #[sea_orm(has_many = "super::cause_social::Entity")]
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::auth_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthData.def()
    }
}

impl Related<super::ngo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ngo.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::cause_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl Related<super::cause_social::Entity> for Entity {
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
