use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250806_000001_auth_data::AuthData, m20250806_000002_user::User};

static IDX_CAUSE_USER_ID: &str = "idx-cause-user_id";
static FK_CAUSE_USER_ID: &str = "fk-cause-user_id";
static FK_CAUSE_AUTH_ID: &str = "fk-cause-auth_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cause::Table)
                    .if_not_exists()
                    // Assigned by the registration workflow (parity scheme),
                    // so no auto increment here.
                    .col(
                        ColumnDef::new(Cause::CauseId)
                            .integer()
                            .not_null()
                            .primary_key()
                            .to_owned(),
                    )
                    .col(string(Cause::Name))
                    .col(text_null(Cause::Description))
                    .col(string_null(Cause::Logo))
                    .col(string_null(Cause::Email))
                    .col(boolean(Cause::IfOnline))
                    .col(boolean(Cause::Verified))
                    .col(integer(Cause::UserId))
                    .col(integer_uniq(Cause::AuthId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAUSE_USER_ID)
                    .table(Cause::Table)
                    .col(Cause::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAUSE_USER_ID)
                    .from_tbl(Cause::Table)
                    .from_col(Cause::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAUSE_AUTH_ID)
                    .from_tbl(Cause::Table)
                    .from_col(Cause::AuthId)
                    .to_tbl(AuthData::Table)
                    .to_col(AuthData::Id)
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
                    .name(FK_CAUSE_AUTH_ID)
                    .table(Cause::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAUSE_USER_ID)
                    .table(Cause::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAUSE_USER_ID)
                    .table(Cause::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cause::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cause {
    Table,
    CauseId,
    Name,
    Description,
    Logo,
    Email,
    IfOnline,
    Verified,
    UserId,
    AuthId,
}
