//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Within the comment aggregation engine every collaborator failure surfaces as an
//! `AppError` and short-circuits the whole aggregation; callers never see a partial list.

pub mod comment;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{comment::CommentError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `CommentError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Comment domain error (missing comment, invalid content, ...).
    ///
    /// Delegates to `CommentError::into_response()` for status code mapping.
    #[error(transparent)]
    CommentErr(#[from] CommentError),

    /// Database operation error from SeaORM.
    ///
    /// This is the store failure of the aggregation engine: any failing collaborator
    /// call ends up here. Results in 500 Internal Server Error with details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected failure inside the application itself.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - Variable - For `CommentErr`, delegated to `CommentError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::CommentErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
