//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a course evaluation written by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, evaluation))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_evaluation_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::course_evaluation::Model), DbErr> {
    let user = super::user::create_user(db).await?;
    let evaluation = super::evaluation::create_evaluation(db, user.id).await?;

    Ok((user, evaluation))
}
