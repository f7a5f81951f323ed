//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert directly
//! through SeaORM active models and return the inserted entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let evaluation = factory::create_evaluation(&db, user.id).await?;
//! let parent = factory::create_parent_comment(&db, evaluation.id, user.id).await?;
//! let reply = factory::create_sub_comment(&db, &parent.id, user.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let parent = factory::parent_comment::ParentCommentFactory::new(&db, evaluation.id, user.id)
//!     .content("first!")
//!     .anonymous(true)
//!     .like_num(3)
//!     .build()
//!     .await?;
//! ```

pub mod comment_like;
pub mod evaluation;
pub mod helpers;
pub mod parent_comment;
pub mod sub_comment;
pub mod user;

pub use comment_like::create_comment_like;
pub use evaluation::create_evaluation;
pub use parent_comment::create_parent_comment;
pub use sub_comment::create_sub_comment;
pub use user::create_user;
