pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_course_evaluation_table;
mod m20261001_000003_create_parent_comment_table;
mod m20261001_000004_create_sub_comment_table;
mod m20261001_000005_create_comment_like_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_course_evaluation_table::Migration),
            Box::new(m20261001_000003_create_parent_comment_table::Migration),
            Box::new(m20261001_000004_create_sub_comment_table::Migration),
            Box::new(m20261001_000005_create_comment_like_table::Migration),
        ]
    }
}
