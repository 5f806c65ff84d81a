use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250806_000002_user::User, m20250806_000003_cause::Cause};

static FK_ACCOUNT_DETAILS_USER_ID: &str = "fk-account_details-user_id";
static FK_ACCOUNT_DETAILS_CAUSE_ID: &str = "fk-account_details-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountDetails::Id))
                    .col(
                        ColumnDef::new(AccountDetails::Iban)
                            .string()
                            .null()
                            .unique_key()
                            .to_owned(),
                    )
                    .col(string_null(AccountDetails::AccName))
                    .col(integer_null(AccountDetails::UserId))
                    .col(integer_null(AccountDetails::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOUNT_DETAILS_USER_ID)
                    .from_tbl(AccountDetails::Table)
                    .from_col(AccountDetails::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCOUNT_DETAILS_CAUSE_ID)
                    .from_tbl(AccountDetails::Table)
                    .from_col(AccountDetails::CauseId)
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
                    .name(FK_ACCOUNT_DETAILS_CAUSE_ID)
                    .table(AccountDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACCOUNT_DETAILS_USER_ID)
                    .table(AccountDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccountDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccountDetails {
    Table,
    Id,
    Iban,
    AccName,
    UserId,
    CauseId,
}
