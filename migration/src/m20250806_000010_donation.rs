use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250806_000002_user::User, m20250806_000003_cause::Cause};

static IDX_DONATION_CAUSE_ID: &str = "idx-donation-cause_id";
static FK_DONATION_USER_ID: &str = "fk-donation-user_id";
static FK_DONATION_CAUSE_ID: &str = "fk-donation-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::DonationId))
                    .col(double(Donation::Amount))
                    .col(integer(Donation::UserId))
                    .col(integer(Donation::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DONATION_CAUSE_ID)
                    .table(Donation::Table)
                    .col(Donation::CauseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_USER_ID)
                    .from_tbl(Donation::Table)
                    .from_col(Donation::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_CAUSE_ID)
                    .from_tbl(Donation::Table)
                    .from_col(Donation::CauseId)
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
                    .name(FK_DONATION_CAUSE_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONATION_USER_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONATION_CAUSE_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Donation {
    Table,
    DonationId,
    Amount,
    UserId,
    CauseId,
}
