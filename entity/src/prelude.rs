pub use super::comment_like::Entity as CommentLike;
pub use super::course_evaluation::Entity as CourseEvaluation;
pub use super::parent_comment::Entity as ParentComment;
pub use super::sub_comment::Entity as SubComment;
pub use super::user::Entity as User;
