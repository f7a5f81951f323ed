use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseEvaluation::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseEvaluation::Id))
                    .col(integer(CourseEvaluation::UserId))
                    .col(string(CourseEvaluation::CourseId))
                    .col(text(CourseEvaluation::Content))
                    .col(integer(CourseEvaluation::CommentNum).default(0))
                    .col(
                        timestamp_with_time_zone(CourseEvaluation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_evaluation_user_id")
                            .from(CourseEvaluation::Table, CourseEvaluation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseEvaluation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseEvaluation {
    Table,
    Id,
    UserId,
    CourseId,
    Content,
    CommentNum,
    CreatedAt,
}
