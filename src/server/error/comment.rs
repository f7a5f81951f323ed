use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::comment::CommentRef};

#[derive(Error, Debug)]
pub enum CommentError {
    /// The course evaluation a comment was submitted for does not exist.
    #[error("Course evaluation {0} not found")]
    EvaluationNotFound(i32),

    /// A reply targets a parent comment that does not exist or was invalidated.
    #[error("Parent comment {0} not found")]
    ParentNotFound(String),

    /// A like update addressed a comment that does not exist.
    #[error("{} comment {} not found", .0.kind.as_str(), .0.id)]
    CommentNotFound(CommentRef),

    /// A bare comment id matched neither the parent nor the sub comment table.
    #[error("Comment {0} not found")]
    UnknownComment(String),

    /// Submitted content is empty or whitespace only.
    #[error("Comment content must not be empty")]
    EmptyContent,

    /// Submitted content exceeds the character limit.
    #[error("Comment content is limited to {max} characters, got {length}")]
    ContentTooLong {
        /// Character count of the submitted content
        length: usize,
        /// Maximum allowed character count
        max: usize,
    },

    /// The operation requires an identified user but the request came from a visitor.
    #[error("This operation requires a signed in user")]
    LoginRequired,

    /// A user attempted to invalidate a comment written by someone else.
    #[error("User {user_id} is not the author of comment {comment_id}")]
    NotAuthor {
        /// User making the request
        user_id: i32,
        /// Comment the user attempted to modify
        comment_id: String,
    },
}

/// Converts comment errors into HTTP responses.
///
/// - Missing evaluations/comments → 404 Not Found
/// - Empty or oversized content → 400 Bad Request
/// - Visitor on an authenticated operation → 401 Unauthorized
/// - Modifying another user's comment → 403 Forbidden
impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EvaluationNotFound(_)
            | Self::ParentNotFound(_)
            | Self::CommentNotFound(_)
            | Self::UnknownComment(_) => StatusCode::NOT_FOUND,
            Self::EmptyContent | Self::ContentTooLong { .. } => StatusCode::BAD_REQUEST,
            Self::LoginRequired => StatusCode::UNAUTHORIZED,
            Self::NotAuthor { .. } => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
