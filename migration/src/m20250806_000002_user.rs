use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250806_000001_auth_data::AuthData;

static FK_USER_AUTH_ID: &str = "fk-user-auth_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::UserId))
                    .col(string(User::Name))
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .null()
                            .unique_key()
                            .to_owned(),
                    )
                    .col(integer_null(User::Age))
                    .col(boolean(User::Verified))
                    .col(integer_uniq(User::AuthId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_AUTH_ID)
                    .from_tbl(User::Table)
                    .from_col(User::AuthId)
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
                    .name(FK_USER_AUTH_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    UserId,
    Name,
    Email,
    Age,
    Verified,
    AuthId,
}
