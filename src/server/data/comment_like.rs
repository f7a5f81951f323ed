//! Like records: one row per (user, comment) pair.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

pub struct CommentLikeRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentLikeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a user has liked a comment.
    pub async fn has_liked(&self, user_id: i32, comment_id: &str) -> Result<bool, DbErr> {
        let like = entity::prelude::CommentLike::find_by_id((user_id, comment_id.to_string()))
            .one(self.db)
            .await?;

        Ok(like.is_some())
    }

    /// Records a like.
    ///
    /// # Returns
    /// - `Ok(true)` - Like recorded
    /// - `Ok(false)` - The user had already liked the comment
    /// - `Err(DbErr)` - Database error
    pub async fn insert(&self, user_id: i32, comment_id: &str) -> Result<bool, DbErr> {
        use entity::comment_like::Column;

        let inserted = entity::prelude::CommentLike::insert(entity::comment_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            comment_id: ActiveValue::Set(comment_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([Column::UserId, Column::CommentId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a like.
    ///
    /// # Returns
    /// - `Ok(true)` - Like removed
    /// - `Ok(false)` - The user had not liked the comment
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, user_id: i32, comment_id: &str) -> Result<bool, DbErr> {
        use entity::comment_like::Column;

        let result = entity::prelude::CommentLike::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CommentId.eq(comment_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
