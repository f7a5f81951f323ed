//! User data repository for profile lookups.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::user::UserInfo;

/// Repository providing read access to user profiles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the public profile of a user.
    ///
    /// # Arguments
    /// - `user_id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(UserInfo))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_profile(&self, user_id: i32) -> Result<Option<UserInfo>, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(user.map(UserInfo::from_entity))
    }
}
