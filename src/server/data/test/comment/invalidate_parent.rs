use super::*;

/// Tests soft deletion of a parent comment.
///
/// Verifies the validity flag is cleared while the record and its counters remain.
///
/// Expected: Ok(true) and the comment still stored with is_valid false
#[tokio::test]
async fn clears_validity_flag_and_keeps_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = ParentCommentFactory::new(db, evaluation.id, author.id)
        .sub_comment_num(3)
        .like_num(2)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let invalidated = repo.invalidate_parent(&parent.id).await?;

    assert!(invalidated);
    let stored = repo.find_parent_by_id(&parent.id).await?.unwrap();
    assert!(!stored.is_valid);
    assert_eq!(stored.sub_comment_num, 3);
    assert_eq!(stored.like_num, 2);

    Ok(())
}

/// Tests soft deletion of a missing comment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_comment_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invalidated = CommentRepository::new(db).invalidate_parent("missing").await?;

    assert!(!invalidated);

    Ok(())
}
