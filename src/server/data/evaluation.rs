//! Course evaluation repository. Only the pieces comment submission needs.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct EvaluationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EvaluationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a course evaluation by id.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::course_evaluation::Model>, DbErr> {
        entity::prelude::CourseEvaluation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Atomically adds `delta` to an evaluation's comment counter.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter updated
    /// - `Ok(false)` - Evaluation not found
    /// - `Err(DbErr)` - Database error
    pub async fn update_comment_num(&self, id: i32, delta: i32) -> Result<bool, DbErr> {
        use entity::course_evaluation::Column;

        let result = entity::prelude::CourseEvaluation::update_many()
            .col_expr(Column::CommentNum, Expr::col(Column::CommentNum).add(delta))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
