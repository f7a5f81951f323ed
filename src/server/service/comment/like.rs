//! Like counter updates for both comment kinds.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        comment::CommentRepository, comment_like::CommentLikeRepository, source::CommentStore,
    },
    error::{comment::CommentError, AppError},
    model::comment::{CommentKind, CommentRef, LikeState},
};

/// Applies signed deltas to comment like counters.
///
/// Holds no lock of its own; correctness under concurrent likes rests on the store's
/// atomic counter update.
#[derive(Clone)]
pub struct LikeUpdateDispatcher {
    store: Arc<dyn CommentStore>,
}

impl LikeUpdateDispatcher {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }

    /// Adds `delta` to the addressed comment's like counter.
    ///
    /// # Returns
    /// - `Ok(like_num)` - Counter value after the update
    /// - `Err(CommentError::CommentNotFound)` - No such comment; nothing was changed
    /// - `Err(AppError)` - Store failure
    pub async fn apply_delta(&self, target: &CommentRef, delta: i32) -> Result<i32, AppError> {
        self.store
            .apply_like_delta(target, delta)
            .await?
            .ok_or_else(|| CommentError::CommentNotFound(target.clone()).into())
    }

    /// Determines which table a bare comment id belongs to.
    ///
    /// For clients that do not send the comment kind. Looks in the sub comment table
    /// first, then the parent table.
    ///
    /// # Returns
    /// - `Ok(CommentRef)` - The id with its kind
    /// - `Err(CommentError::UnknownComment)` - The id matches neither table
    pub async fn resolve(&self, id: &str) -> Result<CommentRef, AppError> {
        if self.store.get_sub_by_id(id).await?.is_some() {
            return Ok(CommentRef::sub(id));
        }

        if self.store.get_parent_by_id(id).await?.is_some() {
            return Ok(CommentRef::parent(id));
        }

        Err(CommentError::UnknownComment(id.to_string()).into())
    }

    /// Resolves the kind when missing, then applies the delta.
    pub async fn apply_delta_to_id(
        &self,
        id: &str,
        kind: Option<CommentKind>,
        delta: i32,
    ) -> Result<i32, AppError> {
        let target = match kind {
            Some(kind) => CommentRef {
                kind,
                id: id.to_string(),
            },
            None => self.resolve(id).await?,
        };

        self.apply_delta(&target, delta).await
    }
}

/// Viewer-facing like toggling.
pub struct CommentLikeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentLikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes or unlikes a comment on behalf of a user.
    ///
    /// Repeating the current state is a no-op that reports the current count. Otherwise
    /// the like row is recorded or removed and the counter moves by one. Both writes
    /// share one transaction: if the counter cannot move, the like row is rolled back.
    ///
    /// # Arguments
    /// - `user_id` - User toggling the like
    /// - `target` - Comment being liked
    /// - `liked` - Desired state
    ///
    /// # Returns
    /// - `Ok(LikeState)` - Counter and like state after the call
    /// - `Err(CommentError::CommentNotFound)` - No such comment; nothing was changed
    /// - `Err(AppError)` - Store failure; nothing was changed
    pub async fn set_liked(
        &self,
        user_id: i32,
        target: CommentRef,
        liked: bool,
    ) -> Result<LikeState, AppError> {
        let txn = self.db.begin().await?;
        let likes = CommentLikeRepository::new(&txn);
        let comments = CommentRepository::new(&txn);

        let changed = if liked {
            likes.insert(user_id, &target.id).await?
        } else {
            likes.delete(user_id, &target.id).await?
        };

        let like_num = if changed {
            let delta = if liked { 1 } else { -1 };
            comments.apply_like_delta(&target, delta).await?
        } else {
            comments.find_like_num(&target).await?
        };

        let Some(like_num) = like_num else {
            txn.rollback().await?;
            return Err(CommentError::CommentNotFound(target).into());
        };

        txn.commit().await?;

        Ok(LikeState {
            like_num,
            is_liked: liked,
        })
    }
}
