use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        comment::{
            CommentDto, CommentKindDto, CommentListDto, CreateCommentDto, CreateReplyDto,
            LikeCountDeltaDto, LikeCountDto, LikeStateDto, ParentCommentDto,
        },
    },
    server::{
        error::AppError,
        middleware::viewer::require_user,
        model::{
            comment::{CommentRef, CreateParentCommentParams, CreateSubCommentParams},
            viewer::Viewer,
        },
        service::comment::{
            like::{CommentLikeService, LikeUpdateDispatcher},
            CommentService,
        },
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize)]
pub struct CommentListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    20
}

/// Get a page of comments for a course evaluation.
///
/// Returns the evaluation's valid parent comments, newest first, each with its
/// replies, author profiles and the viewer's like state. Visitors see every comment
/// as not liked.
///
/// # Arguments
/// - `state` - Application state containing the comment collaborators
/// - `viewer` - Requesting user, or visitor when no identity header is present
/// - `evaluation_id` - Evaluation to list comments for
/// - `params` - Pagination parameters (page and limit)
///
/// # Returns
/// - `200 OK` - Page of comments and the evaluation's total comment count
/// - `400 Bad Request` - Malformed identity header
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/evaluations/{evaluation_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("evaluation_id" = i32, Path, description = "Course evaluation ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Comments per page (default: 20)"),
        ("x-user-id" = Option<i32>, Header, description = "Signed in user; omit for visitors")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentListDto),
        (status = 400, description = "Malformed identity header", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(evaluation_id): Path<i32>,
    Query(params): Query<CommentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db, &state.sources, state.fan_out);

    let page = service
        .list(evaluation_id, params.page, params.limit, viewer)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Post a comment on a course evaluation.
///
/// # Access Control
/// - Signed in users only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `viewer` - Requesting user
/// - `evaluation_id` - Evaluation to comment on
/// - `payload` - Comment content and anonymity flag
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Empty or oversized content
/// - `401 Unauthorized` - Request came from a visitor
/// - `404 Not Found` - Evaluation does not exist
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/evaluations/{evaluation_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("evaluation_id" = i32, Path, description = "Course evaluation ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = ParentCommentDto),
        (status = 400, description = "Invalid comment content", body = ErrorDto),
        (status = 401, description = "Visitors cannot comment", body = ErrorDto),
        (status = 404, description = "Evaluation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(evaluation_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = require_user(viewer)?;
    let service = CommentService::new(&state.db, &state.sources, state.fan_out);

    let params = CreateParentCommentParams::from_dto(user_id, evaluation_id, payload);
    let comment = service.create_parent(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Reply to a parent comment.
///
/// The reply targets the parent comment's author unless `target_user_id` is given.
///
/// # Access Control
/// - Signed in users only
///
/// # Returns
/// - `201 Created` - The created reply
/// - `400 Bad Request` - Empty or oversized content
/// - `401 Unauthorized` - Request came from a visitor
/// - `404 Not Found` - Parent comment missing or removed
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/comments/parent/{comment_id}/replies",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Parent comment ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Successfully created reply", body = CommentDto),
        (status = 400, description = "Invalid reply content", body = ErrorDto),
        (status = 401, description = "Visitors cannot reply", body = ErrorDto),
        (status = 404, description = "Parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(comment_id): Path<String>,
    Json(payload): Json<CreateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = require_user(viewer)?;
    let service = CommentService::new(&state.db, &state.sources, state.fan_out);

    let params = CreateSubCommentParams::from_dto(user_id, comment_id, payload);
    let reply = service.create_reply(params).await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}

/// Remove one of the viewer's own parent comments.
///
/// The comment is hidden from listings; its record, replies and counters are kept.
///
/// # Access Control
/// - Comment author only
///
/// # Returns
/// - `204 No Content` - Comment removed
/// - `401 Unauthorized` - Request came from a visitor
/// - `403 Forbidden` - Comment belongs to another user
/// - `404 Not Found` - Comment missing or already removed
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/comments/parent/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Parent comment ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    responses(
        (status = 204, description = "Successfully removed comment"),
        (status = 401, description = "Visitors cannot remove comments", body = ErrorDto),
        (status = 403, description = "Comment belongs to another user", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invalidate_comment(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = require_user(viewer)?;
    let service = CommentService::new(&state.db, &state.sources, state.fan_out);

    service.invalidate_parent(user_id, &comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like a comment.
///
/// Liking an already liked comment leaves the counter unchanged.
///
/// # Returns
/// - `200 OK` - Counter and like state after the call
/// - `401 Unauthorized` - Request came from a visitor
/// - `404 Not Found` - Comment does not exist
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    put,
    path = "/api/comments/{kind}/{comment_id}/like",
    tag = COMMENT_TAG,
    params(
        ("kind" = CommentKindDto, Path, description = "Comment kind: parent or sub"),
        ("comment_id" = String, Path, description = "Comment ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    responses(
        (status = 200, description = "Successfully liked comment", body = LikeStateDto),
        (status = 401, description = "Visitors cannot like comments", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_comment(
    State(state): State<AppState>,
    viewer: Viewer,
    Path((kind, comment_id)): Path<(CommentKindDto, String)>,
) -> Result<impl IntoResponse, AppError> {
    set_liked(state, viewer, kind, comment_id, true).await
}

/// Remove a like from a comment.
///
/// Unliking a comment that is not liked leaves the counter unchanged.
///
/// # Returns
/// - `200 OK` - Counter and like state after the call
/// - `401 Unauthorized` - Request came from a visitor
/// - `404 Not Found` - Comment does not exist
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/comments/{kind}/{comment_id}/like",
    tag = COMMENT_TAG,
    params(
        ("kind" = CommentKindDto, Path, description = "Comment kind: parent or sub"),
        ("comment_id" = String, Path, description = "Comment ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    responses(
        (status = 200, description = "Successfully removed like", body = LikeStateDto),
        (status = 401, description = "Visitors cannot like comments", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlike_comment(
    State(state): State<AppState>,
    viewer: Viewer,
    Path((kind, comment_id)): Path<(CommentKindDto, String)>,
) -> Result<impl IntoResponse, AppError> {
    set_liked(state, viewer, kind, comment_id, false).await
}

async fn set_liked(
    state: AppState,
    viewer: Viewer,
    kind: CommentKindDto,
    comment_id: String,
    liked: bool,
) -> Result<(StatusCode, Json<LikeStateDto>), AppError> {
    let user_id = require_user(viewer)?;
    let service = CommentLikeService::new(&state.db);

    let target = CommentRef {
        kind: kind.into(),
        id: comment_id,
    };
    let like_state = service.set_liked(user_id, target, liked).await?;

    Ok((StatusCode::OK, Json(like_state.into_dto())))
}

/// Apply a signed delta to a comment's like counter.
///
/// The `kind` field of the body is ignored; the path addresses the comment.
///
/// # Access Control
/// - Signed in users only
///
/// # Returns
/// - `200 OK` - Counter value after the update
/// - `401 Unauthorized` - Request came from a visitor
/// - `404 Not Found` - Comment does not exist
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/comments/{kind}/{comment_id}/like-count",
    tag = COMMENT_TAG,
    params(
        ("kind" = CommentKindDto, Path, description = "Comment kind: parent or sub"),
        ("comment_id" = String, Path, description = "Comment ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    request_body = LikeCountDeltaDto,
    responses(
        (status = 200, description = "Successfully updated like count", body = LikeCountDto),
        (status = 401, description = "Visitors cannot update like counts", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_like_count(
    State(state): State<AppState>,
    viewer: Viewer,
    Path((kind, comment_id)): Path<(CommentKindDto, String)>,
    Json(payload): Json<LikeCountDeltaDto>,
) -> Result<impl IntoResponse, AppError> {
    require_user(viewer)?;
    let dispatcher = LikeUpdateDispatcher::new(state.sources.store.clone());

    let target = CommentRef {
        kind: kind.into(),
        id: comment_id,
    };
    let like_num = dispatcher.apply_delta(&target, payload.delta).await?;

    Ok((StatusCode::OK, Json(LikeCountDto { like_num })))
}

/// Apply a signed delta to a like counter addressed by comment ID alone.
///
/// When the body carries no `kind`, the comment is looked up among replies first and
/// parent comments second.
///
/// # Access Control
/// - Signed in users only
///
/// # Returns
/// - `200 OK` - Counter value after the update
/// - `401 Unauthorized` - Request came from a visitor
/// - `404 Not Found` - No comment with that ID
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/like-count/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = String, Path, description = "Comment ID"),
        ("x-user-id" = i32, Header, description = "Signed in user")
    ),
    request_body = LikeCountDeltaDto,
    responses(
        (status = 200, description = "Successfully updated like count", body = LikeCountDto),
        (status = 401, description = "Visitors cannot update like counts", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_like_count_by_id(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(comment_id): Path<String>,
    Json(payload): Json<LikeCountDeltaDto>,
) -> Result<impl IntoResponse, AppError> {
    require_user(viewer)?;
    let dispatcher = LikeUpdateDispatcher::new(state.sources.store.clone());

    let like_num = dispatcher
        .apply_delta_to_id(&comment_id, payload.kind.map(Into::into), payload.delta)
        .await?;

    Ok((StatusCode::OK, Json(LikeCountDto { like_num })))
}
