//! Reply-level aggregation: enriches every reply of one parent comment.

use tokio_util::sync::CancellationToken;

use crate::server::{
    data::source::CommentSources,
    error::AppError,
    model::{
        comment::{CommentInfo, ParentComment, SubComment},
        viewer::Viewer,
    },
    service::{
        comment::resolve_like_state,
        fan_out::{ensure_active, FanOut},
    },
};

#[derive(Clone)]
pub struct SubCommentAggregator {
    sources: CommentSources,
    width: usize,
}

impl SubCommentAggregator {
    /// Creates an aggregator running at most `width` reply enrichments at once.
    pub fn new(sources: CommentSources, width: usize) -> Self {
        Self { sources, width }
    }

    /// Fetches the replies of a parent comment and enriches them concurrently.
    ///
    /// Replies under an anonymous parent carry its author as `anonymous_author`.
    ///
    /// # Arguments
    /// - `parent` - Parent comment whose replies to load
    /// - `viewer` - Viewer whose like state is computed
    ///
    /// # Returns
    /// - `Ok(Vec<CommentInfo>)` - Enriched replies in store order
    /// - `Err(AppError)` - First failure from the store or any reply enrichment
    pub async fn aggregate(
        &self,
        parent: &ParentComment,
        viewer: Viewer,
    ) -> Result<Vec<CommentInfo>, AppError> {
        self.aggregate_with(parent, viewer, CancellationToken::new())
            .await
    }

    /// Same as `aggregate`, but observes and cancels the given token.
    ///
    /// Parent-level tasks pass a child of their own token so a failure anywhere
    /// above also stops the reply work.
    pub(crate) async fn aggregate_with(
        &self,
        parent: &ParentComment,
        viewer: Viewer,
        cancel: CancellationToken,
    ) -> Result<Vec<CommentInfo>, AppError> {
        ensure_active(&cancel)?;
        let replies = self.sources.store.fetch_replies(&parent.id).await?;

        if replies.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(
            "Enriching {} replies of comment {} (width {})",
            replies.len(),
            parent.id,
            self.width
        );

        let anonymous_author = parent.is_anonymous.then_some(parent.user_id);

        FanOut::new(self.width, cancel)
            .run(replies, |reply, token| {
                let this = self.clone();
                async move { this.enrich(reply, anonymous_author, viewer, &token).await }
            })
            .await
    }

    /// Enriches a single reply: author, reply target and the viewer's like state.
    ///
    /// `anonymous_author` is the parent's author when the parent is anonymous.
    pub async fn enrich(
        &self,
        reply: SubComment,
        anonymous_author: Option<i32>,
        viewer: Viewer,
        cancel: &CancellationToken,
    ) -> Result<CommentInfo, AppError> {
        ensure_active(cancel)?;
        let user_info = self.sources.users.resolve_profile(reply.user_id).await?;

        ensure_active(cancel)?;
        let target_user_info = self
            .sources
            .users
            .resolve_profile(reply.target_user_id)
            .await?;

        let is_liked =
            resolve_like_state(self.sources.likes.as_ref(), viewer, &reply.id, cancel).await?;

        Ok(CommentInfo {
            id: reply.id,
            content: reply.content,
            like_num: reply.like_num,
            is_liked,
            created_at: reply.created_at,
            user_id: reply.user_id,
            user_info,
            target_user_id: reply.target_user_id,
            target_user_info,
            anonymous_author,
        })
    }
}
