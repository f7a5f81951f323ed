//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database pool and the
//! comment collaborators the aggregation engine reads through.

use sea_orm::DatabaseConnection;

use crate::server::{data::source::CommentSources, service::comment::FanOutLimits};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle,
/// `CommentSources` holds `Arc`s and `FanOutLimits` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool used for writes (comment creation, likes).
    pub db: DatabaseConnection,

    /// Collaborators consumed by the aggregation engine.
    pub sources: CommentSources,

    /// Concurrency width per aggregation level.
    pub fan_out: FanOutLimits,
}

impl AppState {
    /// Creates a new application state backed by the given database.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `fan_out` - Concurrency widths for the aggregation engine
    pub fn new(db: DatabaseConnection, fan_out: FanOutLimits) -> Self {
        let sources = CommentSources::from_db(db.clone());

        Self {
            db,
            sources,
            fan_out,
        }
    }
}
