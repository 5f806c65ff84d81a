use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub loc_id: i32,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub contact_no: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cause_id: i32,
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
}

impl Related<super::cause::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cause.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
