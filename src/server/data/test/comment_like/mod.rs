use crate::server::data::comment_like::CommentLikeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests recording a like twice.
///
/// Expected: first insert Ok(true), second Ok(false), like visible once
#[tokio::test]
async fn insert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = CommentLikeRepository::new(db);
    assert!(!repo.has_liked(user.id, "c1").await?);
    assert!(repo.insert(user.id, "c1").await?);
    assert!(!repo.insert(user.id, "c1").await?);
    assert!(repo.has_liked(user.id, "c1").await?);

    Ok(())
}

/// Tests removing a like.
///
/// Expected: first delete Ok(true), second Ok(false), like no longer visible
#[tokio::test]
async fn delete_removes_like_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_comment_like(db, user.id, "c1").await?;

    let repo = CommentLikeRepository::new(db);
    assert!(repo.delete(user.id, "c1").await?);
    assert!(!repo.delete(user.id, "c1").await?);
    assert!(!repo.has_liked(user.id, "c1").await?);

    Ok(())
}

/// Tests that likes are tracked per user.
///
/// Expected: only the liking user reports the like
#[tokio::test]
async fn likes_are_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let liker = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_comment_like(db, liker.id, "c1").await?;

    let repo = CommentLikeRepository::new(db);
    assert!(repo.has_liked(liker.id, "c1").await?);
    assert!(!repo.has_liked(other.id, "c1").await?);

    Ok(())
}
