mod comment;
mod comment_like;
mod evaluation;
