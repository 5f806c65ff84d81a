//! NGO subtype data attached to a cause.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ngo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub ngo_id: i32,
    #[sea_orm(unique)]
    pub cause_id: i32,
    pub year_est: Option<i32>,
    pub age: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cause::Entity",
        from = "Column::CauseId",
        to = "super::cause::Column::CauseId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Cause,
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
}

impl Related<super::cause::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cause.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
