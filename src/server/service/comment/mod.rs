//! Comment listing, submission and like handling.
//!
//! Listing goes through `ParentCommentAggregator`, which fans out one task per parent
//! comment and nests a `SubCommentAggregator` fan-out for every reply list. Creation
//! paths persist through the repositories and enrich the single new record with the
//! same per-item routines the aggregators use.

pub mod like;
pub mod parent;
pub mod reply;

use sea_orm::DatabaseConnection;
use tokio_util::sync::CancellationToken;

use crate::server::{
    data::{
        comment::CommentRepository, evaluation::EvaluationRepository,
        source::{CommentSources, LikeStateOracle},
    },
    error::{comment::CommentError, AppError},
    model::{
        comment::{
            validate_content, CommentInfo, CommentPage, CreateParentCommentParams,
            CreateSubCommentParams, ParentCommentInfo,
        },
        viewer::Viewer,
    },
    service::{
        comment::{parent::ParentCommentAggregator, reply::SubCommentAggregator},
        fan_out::ensure_active,
    },
};

/// Maximum number of concurrently running enrichment tasks per aggregation level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FanOutLimits {
    pub parent: usize,
    pub reply: usize,
}

impl Default for FanOutLimits {
    fn default() -> Self {
        Self {
            parent: 8,
            reply: 8,
        }
    }
}

/// Computes the viewer's like state for one comment.
///
/// Visitors are answered locally with `false`; the oracle is only consulted for
/// identified users.
pub(crate) async fn resolve_like_state(
    likes: &dyn LikeStateOracle,
    viewer: Viewer,
    comment_id: &str,
    cancel: &CancellationToken,
) -> Result<bool, AppError> {
    let Viewer::User(viewer_id) = viewer else {
        return Ok(false);
    };

    ensure_active(cancel)?;
    likes.has_liked(viewer_id, comment_id).await
}

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    sources: &'a CommentSources,
    limits: FanOutLimits,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection used for writes
    /// - `sources` - Collaborators the aggregation engine reads through
    /// - `limits` - Fan-out widths for the parent and reply levels
    pub fn new(db: &'a DatabaseConnection, sources: &'a CommentSources, limits: FanOutLimits) -> Self {
        Self { db, sources, limits }
    }

    /// Lists one page of enriched comments for an evaluation.
    ///
    /// # Arguments
    /// - `evaluation_id` - Evaluation whose comments to list
    /// - `page` - Zero-indexed page number
    /// - `limit` - Page size
    /// - `viewer` - Viewer whose like state is computed
    ///
    /// # Returns
    /// - `Ok(CommentPage)` - Enriched comments in display order plus the total count
    /// - `Err(AppError)` - First failure from any collaborator
    pub async fn list(
        &self,
        evaluation_id: i32,
        page: u64,
        limit: u64,
        viewer: Viewer,
    ) -> Result<CommentPage, AppError> {
        let offset = page.saturating_mul(limit);

        let (comments, total) = ParentCommentAggregator::new(self.sources.clone(), self.limits)
            .aggregate(evaluation_id, limit, offset, viewer)
            .await?;

        Ok(CommentPage { comments, total })
    }

    /// Posts a parent comment on an evaluation.
    ///
    /// Bumps the evaluation's comment counter and returns the new comment enriched
    /// for its author.
    ///
    /// # Returns
    /// - `Ok(ParentCommentInfo)` - The created comment
    /// - `Err(CommentError::EmptyContent | ContentTooLong)` - Content rejected
    /// - `Err(CommentError::EvaluationNotFound)` - No such evaluation
    /// - `Err(AppError)` - Store failure
    pub async fn create_parent(
        &self,
        params: CreateParentCommentParams,
    ) -> Result<ParentCommentInfo, AppError> {
        validate_content(&params.content)?;

        let evaluation_repo = EvaluationRepository::new(self.db);
        if evaluation_repo
            .find_by_id(params.evaluation_id)
            .await?
            .is_none()
        {
            return Err(CommentError::EvaluationNotFound(params.evaluation_id).into());
        }

        let evaluation_id = params.evaluation_id;
        let author = params.user_id;
        let comment = CommentRepository::new(self.db)
            .create_parent(params)
            .await?;
        evaluation_repo.update_comment_num(evaluation_id, 1).await?;

        tracing::info!(
            "User {} commented {} on evaluation {}",
            author,
            comment.id,
            evaluation_id
        );

        ParentCommentAggregator::new(self.sources.clone(), self.limits)
            .enrich(comment, Viewer::User(author), &CancellationToken::new())
            .await
    }

    /// Replies to a parent comment.
    ///
    /// The reply targets the parent's author unless another target is given. The
    /// parent's reply counter is incremented.
    ///
    /// # Returns
    /// - `Ok(CommentInfo)` - The created reply enriched for its author
    /// - `Err(CommentError::EmptyContent | ContentTooLong)` - Content rejected
    /// - `Err(CommentError::ParentNotFound)` - Parent missing or invalidated
    /// - `Err(AppError)` - Store failure
    pub async fn create_reply(
        &self,
        params: CreateSubCommentParams,
    ) -> Result<CommentInfo, AppError> {
        validate_content(&params.content)?;

        let repo = CommentRepository::new(self.db);
        let parent = match repo.find_parent_by_id(&params.parent_id).await? {
            Some(parent) if parent.is_valid => parent,
            _ => return Err(CommentError::ParentNotFound(params.parent_id).into()),
        };

        let target_user_id = params.target_user_id.unwrap_or(parent.user_id);
        let author = params.user_id;
        let reply = repo.create_sub(params, target_user_id).await?;
        repo.increment_sub_comment_num(&parent.id).await?;

        tracing::info!("User {} replied {} to comment {}", author, reply.id, parent.id);

        SubCommentAggregator::new(self.sources.clone(), self.limits.reply)
            .enrich(
                reply,
                parent.is_anonymous.then_some(parent.user_id),
                Viewer::User(author),
                &CancellationToken::new(),
            )
            .await
    }

    /// Soft-deletes a parent comment written by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Comment invalidated; counters are untouched
    /// - `Err(CommentError::ParentNotFound)` - No such comment, or already invalid
    /// - `Err(CommentError::NotAuthor)` - Comment belongs to another user
    /// - `Err(AppError)` - Store failure
    pub async fn invalidate_parent(&self, user_id: i32, id: &str) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let parent = match repo.find_parent_by_id(id).await? {
            Some(parent) if parent.is_valid => parent,
            _ => return Err(CommentError::ParentNotFound(id.to_string()).into()),
        };

        if parent.user_id != user_id {
            return Err(CommentError::NotAuthor {
                user_id,
                comment_id: parent.id,
            }
            .into());
        }

        repo.invalidate_parent(&parent.id).await?;

        tracing::info!("User {} invalidated comment {}", user_id, parent.id);

        Ok(())
    }
}
