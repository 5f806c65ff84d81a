use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250806_000002_user::User, m20250806_000003_cause::Cause};

static IDX_VOLUNTEER_CAUSE_ID: &str = "idx-volunteer-cause_id";
static FK_VOLUNTEER_USER_ID: &str = "fk-volunteer-user_id";
static FK_VOLUNTEER_CAUSE_ID: &str = "fk-volunteer-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volunteer::Table)
                    .if_not_exists()
                    .col(pk_auto(Volunteer::VolunteerId))
                    .col(integer(Volunteer::UserId))
                    .col(integer(Volunteer::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VOLUNTEER_CAUSE_ID)
                    .table(Volunteer::Table)
                    .col(Volunteer::CauseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VOLUNTEER_USER_ID)
                    .from_tbl(Volunteer::Table)
                    .from_col(Volunteer::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VOLUNTEER_CAUSE_ID)
                    .from_tbl(Volunteer::Table)
                    .from_col(Volunteer::CauseId)
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
                    .name(FK_VOLUNTEER_CAUSE_ID)
                    .table(Volunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VOLUNTEER_USER_ID)
                    .table(Volunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VOLUNTEER_CAUSE_ID)
                    .table(Volunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Volunteer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Volunteer {
    Table,
    VolunteerId,
    UserId,
    CauseId,
}
