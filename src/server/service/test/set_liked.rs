use super::*;
use crate::server::{
    data::{comment::CommentRepository, comment_like::CommentLikeRepository},
    service::comment::like::CommentLikeService,
};
use sea_orm::ConnectionTrait;
use test_utils::{builder::TestBuilder, factory};

/// Tests liking a comment twice.
///
/// Verifies the second like is a no-op that reports the current count.
///
/// Expected: like_num 1 after both calls, is_liked true
#[tokio::test]
async fn liking_twice_counts_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let viewer = factory::create_user(db).await?;
    let comment = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    let service = CommentLikeService::new(db);

    let first = service
        .set_liked(viewer.id, CommentRef::parent(comment.id.clone()), true)
        .await
        .unwrap();
    let second = service
        .set_liked(viewer.id, CommentRef::parent(comment.id.clone()), true)
        .await
        .unwrap();

    assert_eq!(first.like_num, 1);
    assert!(first.is_liked);
    assert_eq!(second.like_num, 1);
    assert!(second.is_liked);

    Ok(())
}

/// Tests unliking a reply.
///
/// Expected: like_num back to its starting value, unliking again is a no-op
#[tokio::test]
async fn unliking_reply_restores_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let viewer = factory::create_user(db).await?;
    let comment = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    let reply = factory::sub_comment::SubCommentFactory::new(db, &comment.id, viewer.id, author.id)
        .like_num(4)
        .build()
        .await?;
    let service = CommentLikeService::new(db);

    let liked = service
        .set_liked(author.id, CommentRef::sub(reply.id.clone()), true)
        .await
        .unwrap();
    let unliked = service
        .set_liked(author.id, CommentRef::sub(reply.id.clone()), false)
        .await
        .unwrap();
    let unliked_again = service
        .set_liked(author.id, CommentRef::sub(reply.id.clone()), false)
        .await
        .unwrap();

    assert_eq!(liked.like_num, 5);
    assert_eq!(unliked.like_num, 4);
    assert!(!unliked.is_liked);
    assert_eq!(unliked_again.like_num, 4);

    Ok(())
}

/// Tests liking a comment that does not exist.
///
/// Expected: Err(CommentNotFound)
#[tokio::test]
async fn liking_missing_comment_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let viewer = factory::create_user(db).await?;

    let result = CommentLikeService::new(db)
        .set_liked(viewer.id, CommentRef::sub("missing"), true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommentErr(CommentError::CommentNotFound(_)))
    ));

    Ok(())
}

/// Tests that a like recorded through the service shows up in listings.
///
/// Expected: the liking user sees is_liked true, a visitor sees false
#[tokio::test]
async fn recorded_like_is_visible_to_its_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let viewer = factory::create_user(db).await?;
    let comment = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    let sources = CommentSources::from_db(db.clone());

    CommentLikeService::new(db)
        .set_liked(viewer.id, CommentRef::parent(comment.id.clone()), true)
        .await
        .unwrap();

    let aggregator = ParentCommentAggregator::new(sources.clone(), limits(4));
    let (as_user, _) = aggregator
        .aggregate(evaluation.id, 20, 0, Viewer::User(viewer.id))
        .await
        .unwrap();
    let (as_visitor, _) = aggregator
        .aggregate(evaluation.id, 20, 0, Viewer::Visitor)
        .await
        .unwrap();

    assert!(as_user[0].is_liked);
    assert_eq!(as_user[0].like_num, 1);
    assert!(!as_visitor[0].is_liked);

    Ok(())
}

/// Tests liking with the wrong kind, so the counter update finds no row.
///
/// Verifies the like row written before the counter update is rolled back.
///
/// Expected: Err(CommentNotFound), no like recorded, parent counter unchanged
#[tokio::test]
async fn like_row_rolls_back_when_counter_is_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let viewer = factory::create_user(db).await?;
    let comment =
        factory::parent_comment::ParentCommentFactory::new(db, evaluation.id, author.id)
            .like_num(2)
            .build()
            .await?;

    let result = CommentLikeService::new(db)
        .set_liked(viewer.id, CommentRef::sub(comment.id.clone()), true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommentErr(CommentError::CommentNotFound(_)))
    ));
    assert!(!CommentLikeRepository::new(db)
        .has_liked(viewer.id, &comment.id)
        .await?);
    assert_eq!(
        CommentRepository::new(db)
            .find_like_num(&CommentRef::parent(comment.id))
            .await?,
        Some(2)
    );

    Ok(())
}

/// Tests a counter update that fails inside the database.
///
/// Verifies neither the like row nor the counter change survives the failure, and
/// the like succeeds once the counter can move again.
///
/// Expected: Err(DbErr) with no like recorded, then Ok with like_num 1
#[tokio::test]
async fn failed_counter_update_leaves_no_like() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let viewer = factory::create_user(db).await?;
    let comment = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_like_num BEFORE UPDATE OF like_num ON parent_comment \
         BEGIN SELECT RAISE(ABORT, 'like counter unavailable'); END",
    )
    .await?;
    let service = CommentLikeService::new(db);

    let result = service
        .set_liked(viewer.id, CommentRef::parent(comment.id.clone()), true)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(!CommentLikeRepository::new(db)
        .has_liked(viewer.id, &comment.id)
        .await?);

    db.execute_unprepared("DROP TRIGGER reject_like_num").await?;
    let liked = service
        .set_liked(viewer.id, CommentRef::parent(comment.id.clone()), true)
        .await
        .unwrap();
    assert_eq!(liked.like_num, 1);
    assert!(liked.is_liked);

    Ok(())
}
