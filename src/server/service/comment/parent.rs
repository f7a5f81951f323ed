//! Page-level aggregation: enriches a page of parent comments and their replies.

use tokio_util::sync::CancellationToken;

use crate::server::{
    data::source::CommentSources,
    error::AppError,
    model::{
        comment::{ParentComment, ParentCommentInfo},
        viewer::Viewer,
    },
    service::{
        comment::{reply::SubCommentAggregator, resolve_like_state, FanOutLimits},
        fan_out::{ensure_active, FanOut},
    },
};

/// Enriches one page of parent comments for an evaluation.
///
/// Each parent comment becomes one task that resolves its author, its like state and
/// its full reply list (through `SubCommentAggregator`, itself fanned out). Output
/// order is the store's fetch order.
#[derive(Clone)]
pub struct ParentCommentAggregator {
    sources: CommentSources,
    replies: SubCommentAggregator,
    width: usize,
}

impl ParentCommentAggregator {
    /// Creates an aggregator with independent widths for the parent and reply levels.
    pub fn new(sources: CommentSources, limits: FanOutLimits) -> Self {
        Self {
            replies: SubCommentAggregator::new(sources.clone(), limits.reply),
            sources,
            width: limits.parent,
        }
    }

    /// Fetches and enriches one page of parent comments.
    ///
    /// # Arguments
    /// - `evaluation_id` - Evaluation whose comments to list
    /// - `limit` - Page size
    /// - `offset` - Number of comments to skip
    /// - `viewer` - Viewer whose like state is computed
    ///
    /// # Returns
    /// - `Ok((comments, total))` - Enriched comments in store order and the
    ///   evaluation's total comment count
    /// - `Err(AppError)` - First failure from the store or any enrichment task
    pub async fn aggregate(
        &self,
        evaluation_id: i32,
        limit: u64,
        offset: u64,
        viewer: Viewer,
    ) -> Result<(Vec<ParentCommentInfo>, u64), AppError> {
        let (comments, total) = self
            .sources
            .store
            .fetch_parent_page(evaluation_id, limit, offset)
            .await?;

        if comments.is_empty() {
            return Ok((Vec::new(), total));
        }

        tracing::debug!(
            "Enriching {} parent comments of evaluation {} (width {})",
            comments.len(),
            evaluation_id,
            self.width
        );

        let infos = FanOut::new(self.width, CancellationToken::new())
            .run(comments, |comment, token| {
                let this = self.clone();
                async move { this.enrich(comment, viewer, &token).await }
            })
            .await?;

        Ok((infos, total))
    }

    /// Enriches a single parent comment, including its replies.
    pub async fn enrich(
        &self,
        comment: ParentComment,
        viewer: Viewer,
        cancel: &CancellationToken,
    ) -> Result<ParentCommentInfo, AppError> {
        ensure_active(cancel)?;
        let user_info = self.sources.users.resolve_profile(comment.user_id).await?;

        let is_liked =
            resolve_like_state(self.sources.likes.as_ref(), viewer, &comment.id, cancel).await?;

        let sub_comments = self
            .replies
            .aggregate_with(&comment, viewer, cancel.child_token())
            .await?;

        Ok(ParentCommentInfo {
            id: comment.id,
            content: comment.content,
            like_num: comment.like_num,
            is_liked,
            created_at: comment.created_at,
            is_anonymous: comment.is_anonymous,
            user_info,
            sub_comments_num: comment.sub_comment_num,
            sub_comments,
        })
    }
}
