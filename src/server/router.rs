use axum::{
    routing::{get, patch, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::comment::{
        self, create_comment, create_reply, get_comments, invalidate_comment, like_comment,
        unlike_comment, update_like_count, update_like_count_by_id,
    },
    state::AppState,
};

/// OpenAPI document covering every HTTP endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(
        comment::get_comments,
        comment::create_comment,
        comment::create_reply,
        comment::invalidate_comment,
        comment::like_comment,
        comment::unlike_comment,
        comment::update_like_count,
        comment::update_like_count_by_id,
    ),
    tags(
        (name = "comment", description = "Course evaluation comments, replies and likes")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/evaluations/{evaluation_id}/comments",
            get(get_comments).post(create_comment),
        )
        .route(
            "/api/comments/parent/{comment_id}",
            axum::routing::delete(invalidate_comment),
        )
        .route(
            "/api/comments/parent/{comment_id}/replies",
            post(create_reply),
        )
        .route(
            "/api/comments/{kind}/{comment_id}/like",
            put(like_comment).delete(unlike_comment),
        )
        .route(
            "/api/comments/{kind}/{comment_id}/like-count",
            patch(update_like_count),
        )
        .route("/api/like-count/{comment_id}", patch(update_like_count_by_id))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
