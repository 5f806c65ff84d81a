use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250806_000003_cause::Cause;

static IDX_LOCATION_CAUSE_ID: &str = "idx-location-cause_id";
static FK_LOCATION_CAUSE_ID: &str = "fk-location-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::LocId))
                    .col(string_null(Location::Country))
                    .col(string_null(Location::City))
                    .col(string_null(Location::Address))
                    .col(string_null(Location::ContactNo))
                    .col(double_null(Location::Latitude))
                    .col(double_null(Location::Longitude))
                    .col(integer(Location::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOCATION_CAUSE_ID)
                    .table(Location::Table)
                    .col(Location::CauseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOCATION_CAUSE_ID)
                    .from_tbl(Location::Table)
                    .from_col(Location::CauseId)
                    .to_tbl(Cause::Table)
                    .to_col(Cause::CauseId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LOCATION_CAUSE_ID)
                    .table(Location::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LOCATION_CAUSE_ID)
                    .table(Location::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    LocId,
    Country,
    City,
    Address,
    ContactNo,
    Latitude,
    Longitude,
    CauseId,
}
