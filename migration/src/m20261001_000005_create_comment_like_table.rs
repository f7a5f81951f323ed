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
                    .table(CommentLike::Table)
                    .if_not_exists()
                    .col(integer(CommentLike::UserId))
                    .col(string(CommentLike::CommentId))
                    .col(
                        timestamp_with_time_zone(CommentLike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // Comment id may point at either comment table, so only the user is a foreign key
                    .primary_key(
                        Index::create()
                            .col(CommentLike::UserId)
                            .col(CommentLike::CommentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_like_user_id")
                            .from(CommentLike::Table, CommentLike::UserId)
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
            .drop_table(Table::drop().table(CommentLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentLike {
    Table,
    UserId,
    CommentId,
    CreatedAt,
}
