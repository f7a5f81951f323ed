use super::*;

/// Tests incrementing a reply's like counter.
///
/// Verifies only the addressed table changes even though the ids are unrelated.
///
/// Expected: Ok(Some(3)) and the parent counter untouched
#[tokio::test]
async fn updates_sub_comment_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = ParentCommentFactory::new(db, evaluation.id, author.id)
        .like_num(7)
        .build()
        .await?;
    let reply = SubCommentFactory::new(db, &parent.id, author.id, author.id)
        .like_num(2)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let like_num = repo.apply_like_delta(&CommentRef::sub(reply.id), 1).await?;

    assert_eq!(like_num, Some(3));
    let stored = entity::prelude::ParentComment::find_by_id(parent.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_num, 7);

    Ok(())
}

/// Tests decrementing a parent comment's like counter.
///
/// Expected: Ok(Some(6))
#[tokio::test]
async fn updates_parent_comment_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = ParentCommentFactory::new(db, evaluation.id, author.id)
        .like_num(7)
        .build()
        .await?;

    let like_num = CommentRepository::new(db)
        .apply_like_delta(&CommentRef::parent(parent.id), -1)
        .await?;

    assert_eq!(like_num, Some(6));

    Ok(())
}

/// Tests addressing a parent id as a reply.
///
/// Expected: Ok(None) and the parent counter unchanged
#[tokio::test]
async fn wrong_table_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = ParentCommentFactory::new(db, evaluation.id, author.id)
        .like_num(7)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .apply_like_delta(&CommentRef::sub(parent.id.clone()), 1)
        .await?;

    assert_eq!(result, None);
    let stored = repo.find_parent_by_id(&parent.id).await?.unwrap();
    assert_eq!(stored.like_num, 7);

    Ok(())
}

/// Tests concurrent likes and unlikes on the same comment.
///
/// Expected: counter equals the starting value plus the net delta
#[tokio::test]
async fn concurrent_deltas_leave_net_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = ParentCommentFactory::new(db, evaluation.id, author.id)
        .like_num(10)
        .build()
        .await?;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let db = db.clone();
        let target = CommentRef::parent(parent.id.clone());
        let delta = if i % 2 == 0 { 1 } else { -1 };
        tasks.spawn(async move {
            CommentRepository::new(&db)
                .apply_like_delta(&target, delta)
                .await
        });
    }
    // One extra like so the net is non-zero
    CommentRepository::new(db)
        .apply_like_delta(&CommentRef::parent(parent.id.clone()), 1)
        .await?;
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap()?;
    }

    let stored = CommentRepository::new(db)
        .find_parent_by_id(&parent.id)
        .await?
        .unwrap();
    assert_eq!(stored.like_num, 11);

    Ok(())
}
