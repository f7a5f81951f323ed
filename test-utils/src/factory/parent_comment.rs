//! Parent comment factory for creating top-level comments on an evaluation.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parent comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let parent = ParentCommentFactory::new(&db, evaluation.id, user.id)
///     .content("Great course")
///     .created_at(Utc::now() - Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct ParentCommentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    evaluation_id: i32,
    user_id: i32,
    content: String,
    created_at: DateTime<Utc>,
    sub_comment_num: i32,
    is_anonymous: bool,
    is_valid: bool,
    like_num: i32,
}

impl<'a> ParentCommentFactory<'a> {
    /// Creates a new ParentCommentFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - content: `"Comment {n}"`
    /// - created_at: now
    /// - counters: `0`, anonymous `false`, valid `true`
    pub fn new(db: &'a DatabaseConnection, evaluation_id: i32, user_id: i32) -> Self {
        let n = next_id();
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            evaluation_id,
            user_id,
            content: format!("Comment {}", n),
            created_at: Utc::now(),
            sub_comment_num: 0,
            is_anonymous: false,
            is_valid: true,
            like_num: 0,
        }
    }

    /// Sets an explicit comment id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the comment content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation timestamp, which drives page order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the stored reply counter.
    pub fn sub_comment_num(mut self, sub_comment_num: i32) -> Self {
        self.sub_comment_num = sub_comment_num;
        self
    }

    /// Sets the anonymity flag.
    pub fn anonymous(mut self, is_anonymous: bool) -> Self {
        self.is_anonymous = is_anonymous;
        self
    }

    /// Sets the validity flag. Invalid comments are hidden from listings.
    pub fn valid(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }

    /// Sets the stored like counter.
    pub fn like_num(mut self, like_num: i32) -> Self {
        self.like_num = like_num;
        self
    }

    /// Builds and inserts the parent comment into the database.
    pub async fn build(self) -> Result<entity::parent_comment::Model, DbErr> {
        entity::parent_comment::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            evaluation_id: ActiveValue::Set(self.evaluation_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            sub_comment_num: ActiveValue::Set(self.sub_comment_num),
            is_anonymous: ActiveValue::Set(self.is_anonymous),
            is_valid: ActiveValue::Set(self.is_valid),
            like_num: ActiveValue::Set(self.like_num),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a parent comment with default values.
pub async fn create_parent_comment(
    db: &DatabaseConnection,
    evaluation_id: i32,
    user_id: i32,
) -> Result<entity::parent_comment::Model, DbErr> {
    ParentCommentFactory::new(db, evaluation_id, user_id)
        .build()
        .await
}
