use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthData::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthData::Id))
                    .col(string_uniq(AuthData::Name))
                    .col(string(AuthData::Role))
                    .col(string(AuthData::PasswordHash))
                    .col(boolean(AuthData::Verified))
                    .col(timestamp(AuthData::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthData::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthData {
    Table,
    Id,
    Name,
    Role,
    PasswordHash,
    Verified,
    CreatedAt,
}
