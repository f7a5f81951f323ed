use crate::server::{
    data::comment::CommentRepository,
    model::comment::{
        CommentRef, CreateParentCommentParams, CreateSubCommentParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, parent_comment::ParentCommentFactory, sub_comment::SubCommentFactory,
    },
};

mod apply_like_delta;
mod create;
mod get_parent_page;
mod get_replies;
mod invalidate_parent;
