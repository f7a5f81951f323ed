//! Collaborator interfaces consumed by the comment aggregation engine.
//!
//! The engine never touches the database directly. It reads raw comments through
//! `CommentStore`, profiles through `UserDirectory` and per-viewer like state through
//! `LikeStateOracle`. `SeaOrmSource` implements all three over the repositories in this
//! module; tests substitute in-process fakes.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        comment::CommentRepository, comment_like::CommentLikeRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        comment::{CommentRef, ParentComment, SubComment},
        user::UserInfo,
    },
};

/// Source of truth for raw comment records and their like counters.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Returns one page of valid parent comments in display order plus the
    /// evaluation's total comment count.
    async fn fetch_parent_page(
        &self,
        evaluation_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<ParentComment>, u64), AppError>;

    /// Returns every reply of a parent comment in display order.
    async fn fetch_replies(&self, parent_id: &str) -> Result<Vec<SubComment>, AppError>;

    async fn get_parent_by_id(&self, id: &str) -> Result<Option<ParentComment>, AppError>;

    async fn get_sub_by_id(&self, id: &str) -> Result<Option<SubComment>, AppError>;

    /// Atomically adds `delta` to the addressed comment's like counter.
    ///
    /// Returns `None` when the comment does not exist.
    async fn apply_like_delta(
        &self,
        target: &CommentRef,
        delta: i32,
    ) -> Result<Option<i32>, AppError>;
}

/// Maps user ids to public profiles.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves a profile; an unknown user is a store failure, not a missing comment.
    async fn resolve_profile(&self, user_id: i32) -> Result<UserInfo, AppError>;
}

/// Answers whether a viewer has liked a comment.
#[async_trait]
pub trait LikeStateOracle: Send + Sync {
    async fn has_liked(&self, viewer_id: i32, comment_id: &str) -> Result<bool, AppError>;
}

/// The three collaborators bundled for cheap cloning into enrichment tasks.
#[derive(Clone)]
pub struct CommentSources {
    pub store: Arc<dyn CommentStore>,
    pub users: Arc<dyn UserDirectory>,
    pub likes: Arc<dyn LikeStateOracle>,
}

impl CommentSources {
    pub fn new(
        store: Arc<dyn CommentStore>,
        users: Arc<dyn UserDirectory>,
        likes: Arc<dyn LikeStateOracle>,
    ) -> Self {
        Self {
            store,
            users,
            likes,
        }
    }

    /// Backs every collaborator with the given database.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let source = Arc::new(SeaOrmSource::new(db));

        Self::new(source.clone(), source.clone(), source)
    }
}

/// Database-backed implementation of all three collaborators.
pub struct SeaOrmSource {
    db: DatabaseConnection,
}

impl SeaOrmSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentStore for SeaOrmSource {
    async fn fetch_parent_page(
        &self,
        evaluation_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<ParentComment>, u64), AppError> {
        Ok(CommentRepository::new(&self.db)
            .get_parent_page(evaluation_id, limit, offset)
            .await?)
    }

    async fn fetch_replies(&self, parent_id: &str) -> Result<Vec<SubComment>, AppError> {
        Ok(CommentRepository::new(&self.db)
            .get_replies(parent_id)
            .await?)
    }

    async fn get_parent_by_id(&self, id: &str) -> Result<Option<ParentComment>, AppError> {
        Ok(CommentRepository::new(&self.db)
            .find_parent_by_id(id)
            .await?)
    }

    async fn get_sub_by_id(&self, id: &str) -> Result<Option<SubComment>, AppError> {
        Ok(CommentRepository::new(&self.db).find_sub_by_id(id).await?)
    }

    async fn apply_like_delta(
        &self,
        target: &CommentRef,
        delta: i32,
    ) -> Result<Option<i32>, AppError> {
        Ok(CommentRepository::new(&self.db)
            .apply_like_delta(target, delta)
            .await?)
    }
}

#[async_trait]
impl UserDirectory for SeaOrmSource {
    async fn resolve_profile(&self, user_id: i32) -> Result<UserInfo, AppError> {
        UserRepository::new(&self.db)
            .find_profile(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", user_id)).into())
    }
}

#[async_trait]
impl LikeStateOracle for SeaOrmSource {
    async fn has_liked(&self, viewer_id: i32, comment_id: &str) -> Result<bool, AppError> {
        Ok(CommentLikeRepository::new(&self.db)
            .has_liked(viewer_id, comment_id)
            .await?)
    }
}
