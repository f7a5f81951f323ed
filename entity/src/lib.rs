//! SeaORM entities for the comment backend.

pub mod prelude;

pub mod comment_like;
pub mod course_evaluation;
pub mod parent_comment;
pub mod sub_comment;
pub mod user;
