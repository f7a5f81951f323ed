use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which table a comment lives in.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommentKindDto {
    Parent,
    Sub,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserInfoDto {
    pub username: String,
    pub avatar: String,
}

/// A reply under a parent comment.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: String,
    pub kind: CommentKindDto,
    pub content: String,
    pub like_num: i32,
    pub is_liked: bool,
    pub time: DateTime<Utc>,
    /// `None` when the reply was written by the author of an anonymous parent comment.
    pub user_info: Option<UserInfoDto>,
    /// `None` when the reply targets the author of an anonymous parent comment.
    pub target_user_info: Option<UserInfoDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParentCommentDto {
    pub id: String,
    pub kind: CommentKindDto,
    pub content: String,
    pub like_num: i32,
    pub is_liked: bool,
    pub time: DateTime<Utc>,
    pub is_anonymous: bool,
    /// `None` when the comment was posted anonymously.
    pub user_info: Option<UserInfoDto>,
    /// Authoritative reply count, which may differ from the length of `sub_comments_list`.
    pub sub_comments_num: i32,
    pub sub_comments_list: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentListDto {
    pub parent_comment_sum: u64,
    pub parent_comment_list: Vec<ParentCommentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReplyDto {
    pub content: String,
    /// User being replied to; defaults to the parent comment's author.
    #[serde(default)]
    pub target_user_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LikeCountDeltaDto {
    pub delta: i32,
    /// Omit to look the comment up in both tables.
    #[serde(default)]
    pub kind: Option<CommentKindDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LikeCountDto {
    pub like_num: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LikeStateDto {
    pub like_num: i32,
    pub is_liked: bool,
}
