use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250806_000002_user::User;

static IDX_USER_CONTACT_USER_ID: &str = "idx-user_contact-user_id";
static FK_USER_CONTACT_USER_ID: &str = "fk-user_contact-user_id";
static IDX_USER_SOCIALS_USER_ID: &str = "idx-user_socials-user_id";
static FK_USER_SOCIALS_USER_ID: &str = "fk-user_socials-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserContact::Table)
                    .if_not_exists()
                    .col(pk_auto(UserContact::ContactId))
                    .col(string(UserContact::Contact))
                    .col(integer(UserContact::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CONTACT_USER_ID)
                    .table(UserContact::Table)
                    .col(UserContact::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CONTACT_USER_ID)
                    .from_tbl(UserContact::Table)
                    .from_col(UserContact::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSocials::Table)
                    .if_not_exists()
                    .col(pk_auto(UserSocials::SocialId))
                    .col(string(UserSocials::Social))
                    .col(integer(UserSocials::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_SOCIALS_USER_ID)
                    .table(UserSocials::Table)
                    .col(UserSocials::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_SOCIALS_USER_ID)
                    .from_tbl(UserSocials::Table)
                    .from_col(UserSocials::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
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
                    .name(FK_USER_SOCIALS_USER_ID)
                    .table(UserSocials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_SOCIALS_USER_ID)
                    .table(UserSocials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserSocials::Table).to_owned())
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_CONTACT_USER_ID)
                    .table(UserContact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_CONTACT_USER_ID)
                    .table(UserContact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserContact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserContact {
    Table,
    ContactId,
    Contact,
    UserId,
}

#[derive(DeriveIden)]
enum UserSocials {
    Table,
    SocialId,
    Social,
    UserId,
}
