use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250806_000002_user::User, m20250806_000003_cause::Cause};

static IDX_FEEDBACK_CAUSE_ID: &str = "idx-feedback-cause_id";
static FK_FEEDBACK_USER_ID: &str = "fk-feedback-user_id";
static FK_FEEDBACK_CAUSE_ID: &str = "fk-feedback-cause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::FeedbackId))
                    .col(text_null(Feedback::Comment))
                    .col(integer_null(Feedback::Rating))
                    .col(integer(Feedback::UserId))
                    .col(integer(Feedback::CauseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FEEDBACK_CAUSE_ID)
                    .table(Feedback::Table)
                    .col(Feedback::CauseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FEEDBACK_USER_ID)
                    .from_tbl(Feedback::Table)
                    .from_col(Feedback::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::UserId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FEEDBACK_CAUSE_ID)
                    .from_tbl(Feedback::Table)
                    .from_col(Feedback::CauseId)
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
                    .name(FK_FEEDBACK_CAUSE_ID)
                    .table(Feedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FEEDBACK_USER_ID)
                    .table(Feedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FEEDBACK_CAUSE_ID)
                    .table(Feedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Feedback {
    Table,
    FeedbackId,
    Comment,
    Rating,
    UserId,
    CauseId,
}
