use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User,
    m20261001_000003_create_parent_comment_table::ParentComment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubComment::Table)
                    .if_not_exists()
                    .col(string(SubComment::Id).primary_key())
                    .col(string(SubComment::ParentId))
                    .col(integer(SubComment::UserId))
                    .col(integer(SubComment::TargetUserId))
                    .col(string_len(SubComment::Content, 800))
                    .col(
                        timestamp_with_time_zone(SubComment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(SubComment::LikeNum).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_comment_parent_id")
                            .from(SubComment::Table, SubComment::ParentId)
                            .to(ParentComment::Table, ParentComment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_comment_user_id")
                            .from(SubComment::Table, SubComment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_comment_target_user_id")
                            .from(SubComment::Table, SubComment::TargetUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sub_comment_parent_id")
                    .table(SubComment::Table)
                    .col(SubComment::ParentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubComment {
    Table,
    Id,
    ParentId,
    UserId,
    TargetUserId,
    Content,
    CreatedAt,
    LikeNum,
}
