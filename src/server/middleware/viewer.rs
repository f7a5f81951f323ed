//! Viewer identity for comment requests.
//!
//! Authentication happens upstream of this service; the gateway forwards the signed-in
//! user's id in the `x-user-id` header. Requests without the header are visitors.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{comment::CommentError, AppError},
    model::viewer::Viewer,
};

/// Header carrying the authenticated user's id.
pub const VIEWER_HEADER: &str = "x-user-id";

impl<S: Send + Sync> FromRequestParts<S> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(VIEWER_HEADER) else {
            return Ok(Viewer::Visitor);
        };

        let user_id = value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!("Invalid {} header", VIEWER_HEADER))
            })?;

        Ok(Viewer::User(user_id))
    }
}

/// Returns the user id of a signed-in viewer.
///
/// # Returns
/// - `Ok(user_id)` - Viewer is a user
/// - `Err(CommentError::LoginRequired)` - Viewer is a visitor
pub fn require_user(viewer: Viewer) -> Result<i32, AppError> {
    viewer
        .user_id()
        .ok_or_else(|| CommentError::LoginRequired.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<Viewer, AppError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(VIEWER_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        Viewer::from_request_parts(&mut parts, &()).await
    }

    /// Tests a request without the identity header.
    ///
    /// Expected: Ok(Viewer::Visitor)
    #[tokio::test]
    async fn missing_header_is_visitor() {
        assert_eq!(extract(None).await.unwrap(), Viewer::Visitor);
    }

    /// Tests a request with a numeric identity header.
    ///
    /// Expected: Ok(Viewer::User) with the header's id
    #[tokio::test]
    async fn numeric_header_is_user() {
        assert_eq!(extract(Some("42")).await.unwrap(), Viewer::User(42));
    }

    /// Tests a request with a malformed identity header.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn malformed_header_is_rejected() {
        assert!(matches!(
            extract(Some("alice")).await,
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests that visitors cannot perform user-only operations.
    ///
    /// Expected: Err(LoginRequired) for visitors, Ok for users
    #[test]
    fn require_user_rejects_visitors() {
        assert!(matches!(
            require_user(Viewer::Visitor),
            Err(AppError::CommentErr(CommentError::LoginRequired))
        ));
        assert_eq!(require_user(Viewer::User(3)).unwrap(), 3);
    }
}
