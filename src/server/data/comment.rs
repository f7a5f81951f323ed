//! Comment data repository for database operations.
//!
//! This module provides the `CommentRepository` for both comment tables. Counter
//! updates (likes, reply counts) are issued as single `col = col + delta` statements
//! so concurrent updates on the same row never lose an increment.
//!
//! The repository runs against any connection, so callers can place its statements
//! inside a transaction they own.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionSession, TransactionTrait,
};

use crate::server::model::comment::{
    CommentKind, CommentRef, CreateParentCommentParams, CreateSubCommentParams, ParentComment,
    SubComment,
};

/// Repository providing database operations for parent comments and their replies.
pub struct CommentRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C> CommentRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new parent comment with a fresh UUID and zeroed counters.
    ///
    /// # Returns
    /// - `Ok(ParentComment)` - The created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_parent(
        &self,
        params: CreateParentCommentParams,
    ) -> Result<ParentComment, DbErr> {
        let entity = entity::parent_comment::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            evaluation_id: ActiveValue::Set(params.evaluation_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            sub_comment_num: ActiveValue::Set(0),
            is_anonymous: ActiveValue::Set(params.is_anonymous),
            is_valid: ActiveValue::Set(true),
            like_num: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(ParentComment::from_entity(entity))
    }

    /// Inserts a new reply with a fresh UUID.
    ///
    /// # Arguments
    /// - `params` - Reply parameters
    /// - `target_user_id` - Resolved reply target (the caller applies the default)
    ///
    /// # Returns
    /// - `Ok(SubComment)` - The created reply
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_sub(
        &self,
        params: CreateSubCommentParams,
        target_user_id: i32,
    ) -> Result<SubComment, DbErr> {
        let entity = entity::sub_comment::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            parent_id: ActiveValue::Set(params.parent_id),
            user_id: ActiveValue::Set(params.user_id),
            target_user_id: ActiveValue::Set(target_user_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            like_num: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(SubComment::from_entity(entity))
    }

    /// Gets one page of valid parent comments for an evaluation, newest first.
    ///
    /// The total counts every valid parent comment of the evaluation and does not
    /// depend on `limit` or `offset`.
    ///
    /// # Arguments
    /// - `evaluation_id` - Evaluation the comments belong to
    /// - `limit` - Maximum number of comments to return
    /// - `offset` - Number of comments to skip
    ///
    /// # Returns
    /// - `Ok((comments, total))` - Page of comments and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_parent_page(
        &self,
        evaluation_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<ParentComment>, u64), DbErr> {
        let query = entity::prelude::ParentComment::find()
            .filter(entity::parent_comment::Column::EvaluationId.eq(evaluation_id))
            .filter(entity::parent_comment::Column::IsValid.eq(true));

        let total = query.clone().count(self.db).await?;

        let comments = query
            .order_by_desc(entity::parent_comment::Column::CreatedAt)
            .order_by_desc(entity::parent_comment::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?
            .into_iter()
            .map(ParentComment::from_entity)
            .collect();

        Ok((comments, total))
    }

    /// Gets every reply of a parent comment in conversation order (oldest first).
    pub async fn get_replies(&self, parent_id: &str) -> Result<Vec<SubComment>, DbErr> {
        let replies = entity::prelude::SubComment::find()
            .filter(entity::sub_comment::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::sub_comment::Column::CreatedAt)
            .order_by_asc(entity::sub_comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(SubComment::from_entity)
            .collect();

        Ok(replies)
    }

    /// Finds a parent comment by id regardless of its validity flag.
    pub async fn find_parent_by_id(&self, id: &str) -> Result<Option<ParentComment>, DbErr> {
        let entity = entity::prelude::ParentComment::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(ParentComment::from_entity))
    }

    /// Finds a reply by id.
    pub async fn find_sub_by_id(&self, id: &str) -> Result<Option<SubComment>, DbErr> {
        let entity = entity::prelude::SubComment::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(SubComment::from_entity))
    }

    /// Reads a comment's like counter from the addressed table.
    ///
    /// # Returns
    /// - `Ok(Some(like_num))` - Current counter value
    /// - `Ok(None)` - No comment with that id in the addressed table
    /// - `Err(DbErr)` - Database error
    pub async fn find_like_num(&self, target: &CommentRef) -> Result<Option<i32>, DbErr> {
        let like_num = match target.kind {
            CommentKind::Parent => entity::prelude::ParentComment::find_by_id(target.id.clone())
                .one(self.db)
                .await?
                .map(|comment| comment.like_num),
            CommentKind::Sub => entity::prelude::SubComment::find_by_id(target.id.clone())
                .one(self.db)
                .await?
                .map(|comment| comment.like_num),
        };

        Ok(like_num)
    }

    /// Atomically adds `delta` to a comment's like counter.
    ///
    /// The increment and the read-back run in one transaction, so the returned count is
    /// the value this update produced. Inside a caller's transaction this becomes a
    /// savepoint.
    ///
    /// # Returns
    /// - `Ok(Some(like_num))` - Counter value after the update
    /// - `Ok(None)` - No comment with that id in the addressed table
    /// - `Err(DbErr)` - Database error
    pub async fn apply_like_delta(
        &self,
        target: &CommentRef,
        delta: i32,
    ) -> Result<Option<i32>, DbErr> {
        let txn = self.db.begin().await?;

        let like_num = match target.kind {
            CommentKind::Parent => {
                use entity::parent_comment::Column;

                let result = entity::prelude::ParentComment::update_many()
                    .col_expr(Column::LikeNum, Expr::col(Column::LikeNum).add(delta))
                    .filter(Column::Id.eq(target.id.as_str()))
                    .exec(&txn)
                    .await?;

                if result.rows_affected == 0 {
                    None
                } else {
                    entity::prelude::ParentComment::find_by_id(target.id.clone())
                        .one(&txn)
                        .await?
                        .map(|comment| comment.like_num)
                }
            }
            CommentKind::Sub => {
                use entity::sub_comment::Column;

                let result = entity::prelude::SubComment::update_many()
                    .col_expr(Column::LikeNum, Expr::col(Column::LikeNum).add(delta))
                    .filter(Column::Id.eq(target.id.as_str()))
                    .exec(&txn)
                    .await?;

                if result.rows_affected == 0 {
                    None
                } else {
                    entity::prelude::SubComment::find_by_id(target.id.clone())
                        .one(&txn)
                        .await?
                        .map(|comment| comment.like_num)
                }
            }
        };

        txn.commit().await?;

        Ok(like_num)
    }

    /// Atomically increments a parent comment's reply counter by one.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - Parent comment not found
    /// - `Err(DbErr)` - Database error
    pub async fn increment_sub_comment_num(&self, parent_id: &str) -> Result<bool, DbErr> {
        use entity::parent_comment::Column;

        let result = entity::prelude::ParentComment::update_many()
            .col_expr(Column::SubCommentNum, Expr::col(Column::SubCommentNum).add(1))
            .filter(Column::Id.eq(parent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft-deletes a parent comment by clearing its validity flag.
    ///
    /// Counters are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment invalidated
    /// - `Ok(false)` - Comment not found
    /// - `Err(DbErr)` - Database error
    pub async fn invalidate_parent(&self, id: &str) -> Result<bool, DbErr> {
        use entity::parent_comment::Column;

        let result = entity::prelude::ParentComment::update_many()
            .col_expr(Column::IsValid, Expr::value(false))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
