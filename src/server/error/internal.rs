use thiserror::Error;
use tokio::task::JoinError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// An enrichment task panicked or was aborted before producing a result.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Comment enrichment task failed to complete: {0}")]
    TaskJoin(#[from] JoinError),

    /// The fan-out finished without a result for the given input position.
    ///
    /// Every position is written exactly once before the fan-out returns, so this
    /// indicates a bug in the fan-out loop.
    #[error("Missing enrichment result for position {index}")]
    MissingResult {
        /// Input position with no result
        index: usize,
    },

    /// The enclosing aggregation was cancelled after a sibling task failed.
    ///
    /// Only ever observed by tasks that are about to be discarded.
    #[error("Comment aggregation was cancelled")]
    Cancelled,
}
