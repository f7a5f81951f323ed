//! Domain models for comment data operations.
//!
//! Raw records (`ParentComment`, `SubComment`) mirror what the store holds. The
//! aggregated views (`ParentCommentInfo`, `CommentInfo`) are per-request projections
//! carrying resolved profiles and the viewer's like state; they are never persisted.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{
        CommentDto, CommentKindDto, CommentListDto, CreateCommentDto, CreateReplyDto,
        LikeStateDto, ParentCommentDto,
    },
    server::{error::comment::CommentError, model::user::UserInfo},
};

/// Maximum comment length in characters.
pub const MAX_CONTENT_CHARS: usize = 200;

/// Discriminates the two comment tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Parent,
    Sub,
}

impl CommentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Sub => "sub",
        }
    }
}

impl From<CommentKindDto> for CommentKind {
    fn from(dto: CommentKindDto) -> Self {
        match dto {
            CommentKindDto::Parent => Self::Parent,
            CommentKindDto::Sub => Self::Sub,
        }
    }
}

/// Addresses a single comment together with the table it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentRef {
    pub kind: CommentKind,
    pub id: String,
}

impl CommentRef {
    pub fn parent(id: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::Parent,
            id: id.into(),
        }
    }

    pub fn sub(id: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::Sub,
            id: id.into(),
        }
    }
}

/// Top-level comment attached to a course evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentComment {
    pub id: String,
    pub user_id: i32,
    pub evaluation_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Authoritative reply counter maintained by the store.
    pub sub_comment_num: i32,
    pub is_anonymous: bool,
    /// Soft-deletion flag; invalid comments are excluded from listings.
    pub is_valid: bool,
    pub like_num: i32,
}

impl ParentComment {
    /// Converts an entity model to a parent comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::parent_comment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            evaluation_id: entity.evaluation_id,
            content: entity.content,
            created_at: entity.created_at,
            sub_comment_num: entity.sub_comment_num,
            is_anonymous: entity.is_anonymous,
            is_valid: entity.is_valid,
            like_num: entity.like_num,
        }
    }
}

/// Reply to a parent comment, directed at `target_user_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubComment {
    pub id: String,
    pub parent_id: String,
    pub user_id: i32,
    pub target_user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_num: i32,
}

impl SubComment {
    /// Converts an entity model to a sub comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::sub_comment::Model) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            user_id: entity.user_id,
            target_user_id: entity.target_user_id,
            content: entity.content,
            created_at: entity.created_at,
            like_num: entity.like_num,
        }
    }
}

/// Enriched reply: profiles resolved, like state computed for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentInfo {
    pub id: String,
    pub content: String,
    pub like_num: i32,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub user_info: UserInfo,
    pub target_user_id: i32,
    pub target_user_info: UserInfo,
    /// Author of the parent comment when it was posted anonymously.
    ///
    /// That user's profile is withheld from the wire wherever it appears on this reply.
    pub anonymous_author: Option<i32>,
}

impl CommentInfo {
    /// Converts to the wire representation, hiding the anonymous parent author.
    pub fn into_dto(self) -> CommentDto {
        let visible = |user_id: i32| self.anonymous_author != Some(user_id);
        let user_info = visible(self.user_id).then(|| self.user_info.into_dto());
        let target_user_info =
            visible(self.target_user_id).then(|| self.target_user_info.into_dto());

        CommentDto {
            id: self.id,
            kind: CommentKindDto::Sub,
            content: self.content,
            like_num: self.like_num,
            is_liked: self.is_liked,
            time: self.created_at,
            user_info,
            target_user_info,
        }
    }
}

/// Enriched parent comment with its enriched replies in store order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentCommentInfo {
    pub id: String,
    pub content: String,
    pub like_num: i32,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub is_anonymous: bool,
    pub user_info: UserInfo,
    pub sub_comments_num: i32,
    pub sub_comments: Vec<CommentInfo>,
}

impl ParentCommentInfo {
    /// Converts to the wire representation, hiding the author of anonymous comments.
    pub fn into_dto(self) -> ParentCommentDto {
        ParentCommentDto {
            id: self.id,
            kind: CommentKindDto::Parent,
            content: self.content,
            like_num: self.like_num,
            is_liked: self.is_liked,
            time: self.created_at,
            is_anonymous: self.is_anonymous,
            user_info: (!self.is_anonymous).then(|| self.user_info.into_dto()),
            sub_comments_num: self.sub_comments_num,
            sub_comments_list: self
                .sub_comments
                .into_iter()
                .map(CommentInfo::into_dto)
                .collect(),
        }
    }
}

/// One page of enriched parent comments plus the evaluation's total comment count.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentPage {
    pub comments: Vec<ParentCommentInfo>,
    /// Number of valid parent comments for the evaluation, independent of paging.
    pub total: u64,
}

impl CommentPage {
    pub fn into_dto(self) -> CommentListDto {
        CommentListDto {
            parent_comment_sum: self.total,
            parent_comment_list: self
                .comments
                .into_iter()
                .map(ParentCommentInfo::into_dto)
                .collect(),
        }
    }
}

/// Parameters for posting a parent comment on an evaluation.
#[derive(Debug, Clone)]
pub struct CreateParentCommentParams {
    pub user_id: i32,
    pub evaluation_id: i32,
    pub content: String,
    pub is_anonymous: bool,
}

impl CreateParentCommentParams {
    pub fn from_dto(user_id: i32, evaluation_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            user_id,
            evaluation_id,
            content: dto.content,
            is_anonymous: dto.is_anonymous,
        }
    }
}

/// Parameters for replying to a parent comment.
#[derive(Debug, Clone)]
pub struct CreateSubCommentParams {
    pub user_id: i32,
    pub parent_id: String,
    /// Defaults to the parent comment's author when `None`.
    pub target_user_id: Option<i32>,
    pub content: String,
}

impl CreateSubCommentParams {
    pub fn from_dto(user_id: i32, parent_id: String, dto: CreateReplyDto) -> Self {
        Self {
            user_id,
            parent_id,
            target_user_id: dto.target_user_id,
            content: dto.content,
        }
    }
}

/// Like counter and the viewer's like state after a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub like_num: i32,
    pub is_liked: bool,
}

impl LikeState {
    pub fn into_dto(self) -> LikeStateDto {
        LikeStateDto {
            like_num: self.like_num,
            is_liked: self.is_liked,
        }
    }
}

/// Checks that comment content is non-empty and within the character limit.
///
/// # Returns
/// - `Ok(())` - Content is acceptable
/// - `Err(CommentError::EmptyContent)` - Content is empty or whitespace only
/// - `Err(CommentError::ContentTooLong)` - Content exceeds `MAX_CONTENT_CHARS`
pub fn validate_content(content: &str) -> Result<(), CommentError> {
    if content.trim().is_empty() {
        return Err(CommentError::EmptyContent);
    }

    let length = content.chars().count();
    if length > MAX_CONTENT_CHARS {
        return Err(CommentError::ContentTooLong {
            length,
            max: MAX_CONTENT_CHARS,
        });
    }

    Ok(())
}
