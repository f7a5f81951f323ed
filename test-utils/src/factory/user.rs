//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .avatar("https://cdn.example/alice.png")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    sid: String,
    username: String,
    avatar: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - sid: `"2026{id}"` where id is auto-incremented
    /// - username: `"User {id}"`
    /// - avatar: `"avatar_{id}.png"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            sid: format!("2026{:06}", id),
            username: format!("User {}", id),
            avatar: format!("avatar_{}.png", id),
        }
    }

    /// Sets the display name for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the avatar URL for the user.
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            sid: ActiveValue::Set(self.sid),
            username: ActiveValue::Set(self.username),
            avatar: ActiveValue::Set(self.avatar),
            is_blocked: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
