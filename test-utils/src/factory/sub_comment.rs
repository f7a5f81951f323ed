//! Sub comment (reply) factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test replies under a parent comment.
pub struct SubCommentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    parent_id: String,
    user_id: i32,
    target_user_id: i32,
    content: String,
    created_at: DateTime<Utc>,
    like_num: i32,
}

impl<'a> SubCommentFactory<'a> {
    /// Creates a new SubCommentFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - content: `"Reply {n}"`
    /// - created_at: now
    /// - like_num: `0`
    pub fn new(
        db: &'a DatabaseConnection,
        parent_id: impl Into<String>,
        user_id: i32,
        target_user_id: i32,
    ) -> Self {
        let n = next_id();
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            parent_id: parent_id.into(),
            user_id,
            target_user_id,
            content: format!("Reply {}", n),
            created_at: Utc::now(),
            like_num: 0,
        }
    }

    /// Sets an explicit comment id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the reply content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation timestamp, which drives reply order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the stored like counter.
    pub fn like_num(mut self, like_num: i32) -> Self {
        self.like_num = like_num;
        self
    }

    /// Builds and inserts the reply into the database.
    pub async fn build(self) -> Result<entity::sub_comment::Model, DbErr> {
        entity::sub_comment::ActiveModel {
            id: ActiveValue::Set(self.id),
            parent_id: ActiveValue::Set(self.parent_id),
            user_id: ActiveValue::Set(self.user_id),
            target_user_id: ActiveValue::Set(self.target_user_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            like_num: ActiveValue::Set(self.like_num),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reply with default values.
pub async fn create_sub_comment(
    db: &DatabaseConnection,
    parent_id: &str,
    user_id: i32,
    target_user_id: i32,
) -> Result<entity::sub_comment::Model, DbErr> {
    SubCommentFactory::new(db, parent_id, user_id, target_user_id)
        .build()
        .await
}
