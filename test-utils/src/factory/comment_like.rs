//! Comment like factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that `user_id` likes `comment_id`.
///
/// Does not touch the comment's like counter; set that through the comment factories.
pub async fn create_comment_like(
    db: &DatabaseConnection,
    user_id: i32,
    comment_id: &str,
) -> Result<entity::comment_like::Model, DbErr> {
    entity::comment_like::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        comment_id: ActiveValue::Set(comment_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
