//! Public user profile as shown next to a comment.

use crate::model::comment::UserInfoDto;

/// Display name and avatar of a comment author or reply target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub avatar: String,
}

impl UserInfo {
    /// Projects a user entity down to its public profile.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            avatar: entity.avatar,
        }
    }

    pub fn into_dto(self) -> UserInfoDto {
        UserInfoDto {
            username: self.username,
            avatar: self.avatar,
        }
    }
}
