use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250806_000003_cause::Cause, m20250806_000004_ngo::Ngo};

static FK_EVENT_CAUSE_ID: &str = "fk-event-cause_id";
static FK_EVENT_NGO_ID: &str = "fk-event-ngo_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::EventId))
                    .col(integer_null(Event::Capacity))
                    .col(date_null(Event::Date))
                    .col(time_null(Event::Time))
                    .col(integer_uniq(Event::CauseId))
                    .col(integer_null(Event::NgoId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_CAUSE_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::CauseId)
                    .to_tbl(Cause::Table)
                    .to_col(Cause::CauseId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_NGO_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::NgoId)
                    .to_tbl(Ngo::Table)
                    .to_col(Ngo::NgoId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_NGO_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EVENT_CAUSE_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    EventId,
    Capacity,
    Date,
    Time,
    CauseId,
    NgoId,
}
