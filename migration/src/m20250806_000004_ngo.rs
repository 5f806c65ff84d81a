use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250806_000003_cause::Cause;

static FK_NGO_CAUSE_ID: &str = "fk-ngo-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ngo::Table)
                    .if_not_exists()
                    .col(pk_auto(Ngo::NgoId))
                    .col(integer_uniq(Ngo::CauseId))
                    .col(integer_null(Ngo::YearEst))
                    .col(integer_null(Ngo::Age))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NGO_CAUSE_ID)
                    .from_tbl(Ngo::Table)
                    .from_col(Ngo::CauseId)
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
                    .name(FK_NGO_CAUSE_ID)
                    .table(Ngo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ngo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ngo {
    Table,
    NgoId,
    CauseId,
    YearEst,
    Age,
}
