//! Course evaluation factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test course evaluations.
pub struct EvaluationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    course_id: String,
    content: String,
    comment_num: i32,
}

impl<'a> EvaluationFactory<'a> {
    /// Creates a new EvaluationFactory with default values.
    ///
    /// Defaults:
    /// - course_id: `"course_{id}"`
    /// - content: `"Evaluation {id}"`
    /// - comment_num: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Author of the evaluation
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            course_id: format!("course_{}", id),
            content: format!("Evaluation {}", id),
            comment_num: 0,
        }
    }

    /// Sets the stored comment counter.
    pub fn comment_num(mut self, comment_num: i32) -> Self {
        self.comment_num = comment_num;
        self
    }

    /// Builds and inserts the evaluation entity into the database.
    pub async fn build(self) -> Result<entity::course_evaluation::Model, DbErr> {
        entity::course_evaluation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            course_id: ActiveValue::Set(self.course_id),
            content: ActiveValue::Set(self.content),
            comment_num: ActiveValue::Set(self.comment_num),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an evaluation with default values for the given author.
pub async fn create_evaluation(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::course_evaluation::Model, DbErr> {
    EvaluationFactory::new(db, user_id).build().await
}
