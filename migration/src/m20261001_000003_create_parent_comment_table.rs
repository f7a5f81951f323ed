use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User,
    m20261001_000002_create_course_evaluation_table::CourseEvaluation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParentComment::Table)
                    .if_not_exists()
                    .col(string(ParentComment::Id).primary_key())
                    .col(integer(ParentComment::UserId))
                    .col(integer(ParentComment::EvaluationId))
                    .col(string_len(ParentComment::Content, 800))
                    .col(
                        timestamp_with_time_zone(ParentComment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(ParentComment::SubCommentNum).default(0))
                    .col(boolean(ParentComment::IsAnonymous).default(false))
                    .col(boolean(ParentComment::IsValid).default(true))
                    .col(integer(ParentComment::LikeNum).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parent_comment_user_id")
                            .from(ParentComment::Table, ParentComment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parent_comment_evaluation_id")
                            .from(ParentComment::Table, ParentComment::EvaluationId)
                            .to(CourseEvaluation::Table, CourseEvaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Page queries filter by evaluation and order by recency
        manager
            .create_index(
                Index::create()
                    .name("idx_parent_comment_evaluation_created")
                    .table(ParentComment::Table)
                    .col(ParentComment::EvaluationId)
                    .col(ParentComment::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParentComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParentComment {
    Table,
    Id,
    UserId,
    EvaluationId,
    Content,
    CreatedAt,
    SubCommentNum,
    IsAnonymous,
    IsValid,
    LikeNum,
}
