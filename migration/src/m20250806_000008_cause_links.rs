use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250806_000003_cause::Cause;

static IDX_CAUSE_CONTACT_CAUSE_ID: &str = "idx-cause_contact-cause_id";
static FK_CAUSE_CONTACT_CAUSE_ID: &str = "fk-cause_contact-cause_id";
static IDX_CAUSE_SOCIALS_CAUSE_ID: &str = "idx-cause_socials-cause_id";
static FK_CAUSE_SOCIALS_CAUSE_ID: &str = "fk-cause_socials-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CauseContact::Table)
                    .if_not_exists()
                    .col(pk_auto(CauseContact::ContactId))
                    .col(string(CauseContact::Contact))
                    .col(integer(CauseContact::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAUSE_CONTACT_CAUSE_ID)
                    .table(CauseContact::Table)
                    .col(CauseContact::CauseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAUSE_CONTACT_CAUSE_ID)
                    .from_tbl(CauseContact::Table)
                    .from_col(CauseContact::CauseId)
                    .to_tbl(Cause::Table)
                    .to_col(Cause::CauseId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CauseSocials::Table)
                    .if_not_exists()
                    .col(pk_auto(CauseSocials::SocialId))
                    .col(string(CauseSocials::Social))
                    .col(integer(CauseSocials::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAUSE_SOCIALS_CAUSE_ID)
                    .table(CauseSocials::Table)
                    .col(CauseSocials::CauseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAUSE_SOCIALS_CAUSE_ID)
                    .from_tbl(CauseSocials::Table)
                    .from_col(CauseSocials::CauseId)
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
                    .name(FK_CAUSE_SOCIALS_CAUSE_ID)
                    .table(CauseSocials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAUSE_SOCIALS_CAUSE_ID)
                    .table(CauseSocials::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CauseSocials::Table).to_owned())
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAUSE_CONTACT_CAUSE_ID)
                    .table(CauseContact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAUSE_CONTACT_CAUSE_ID)
                    .table(CauseContact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CauseContact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CauseContact {
    Table,
    ContactId,
    Contact,
    CauseId,
}

#[derive(DeriveIden)]
enum CauseSocials {
    Table,
    SocialId,
    Social,
    CauseId,
}
