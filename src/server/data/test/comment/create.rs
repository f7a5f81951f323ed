use super::*;

/// Tests inserting a parent comment.
///
/// Verifies a UUID id is assigned and all counters start at zero.
///
/// Expected: Ok with a valid, non-anonymous comment and zeroed counters
#[tokio::test]
async fn creates_parent_with_zeroed_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;

    let comment = CommentRepository::new(db)
        .create_parent(CreateParentCommentParams {
            user_id: author.id,
            evaluation_id: evaluation.id,
            content: "Solid lectures".to_string(),
            is_anonymous: true,
        })
        .await?;

    assert!(uuid::Uuid::parse_str(&comment.id).is_ok());
    assert!(comment.is_valid);
    assert!(comment.is_anonymous);
    assert_eq!(comment.like_num, 0);
    assert_eq!(comment.sub_comment_num, 0);

    Ok(())
}

/// Tests inserting a reply and bumping the parent's reply counter.
///
/// Expected: Ok with the reply stored and sub_comment_num 1
#[tokio::test]
async fn creates_reply_and_increments_parent_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    let repo = CommentRepository::new(db);

    let reply = repo
        .create_sub(
            CreateSubCommentParams {
                user_id: author.id,
                parent_id: parent.id.clone(),
                target_user_id: None,
                content: "Thanks".to_string(),
            },
            author.id,
        )
        .await?;
    let incremented = repo.increment_sub_comment_num(&parent.id).await?;

    assert!(incremented);
    assert_eq!(reply.parent_id, parent.id);
    let stored = repo.find_parent_by_id(&parent.id).await?.unwrap();
    assert_eq!(stored.sub_comment_num, 1);
    assert!(repo.find_sub_by_id(&reply.id).await?.is_some());

    Ok(())
}

/// Tests incrementing the reply counter of a missing parent.
///
/// Expected: Ok(false)
#[tokio::test]
async fn increment_on_missing_parent_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let incremented = CommentRepository::new(db)
        .increment_sub_comment_num("missing")
        .await?;

    assert!(!incremented);

    Ok(())
}
