//! KeStack Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the comment
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for seeding users, evaluations, comments and likes.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_comments() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_comment_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
//!     let comment = factory::create_parent_comment(db, evaluation.id, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
