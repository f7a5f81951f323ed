use std::{sync::Arc, time::Duration};

use sea_orm::DbErr;

use crate::server::{
    data::source::CommentSources,
    error::{comment::CommentError, AppError},
    model::{
        comment::{CommentKind, CommentPage, CommentRef},
        viewer::Viewer,
    },
    service::comment::{
        like::LikeUpdateDispatcher, parent::ParentCommentAggregator, reply::SubCommentAggregator,
        FanOutLimits,
    },
};

mod set_liked;

use fakes::{parent, reply, FakeDirectory, FakeOracle, FakeStore};

/// Bundles the fakes into collaborator sources while keeping handles for assertions.
fn sources(
    store: &Arc<FakeStore>,
    directory: &Arc<FakeDirectory>,
    oracle: &Arc<FakeOracle>,
) -> CommentSources {
    CommentSources::new(store.clone(), directory.clone(), oracle.clone())
}

fn limits(width: usize) -> FanOutLimits {
    FanOutLimits {
        parent: width,
        reply: width,
    }
}
