use super::*;

/// Tests that replies come back oldest first and only for the requested parent.
///
/// Expected: Ok with the parent's replies in creation order
#[tokio::test]
async fn returns_replies_of_parent_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let replier = factory::create_user(db).await?;
    let parent = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    let other_parent = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    let now = Utc::now();

    for (id, age) in [("late", 1), ("early", 5), ("middle", 3)] {
        SubCommentFactory::new(db, &parent.id, replier.id, author.id)
            .id(id)
            .created_at(now - Duration::minutes(age))
            .build()
            .await?;
    }
    factory::create_sub_comment(db, &other_parent.id, replier.id, author.id).await?;

    let replies = CommentRepository::new(db).get_replies(&parent.id).await?;

    let ids: Vec<&str> = replies.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "middle", "late"]);
    assert!(replies.iter().all(|r| r.target_user_id == author.id));

    Ok(())
}

/// Tests a parent without replies.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn parent_without_replies_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let parent = factory::create_parent_comment(db, evaluation.id, author.id).await?;

    let replies = CommentRepository::new(db).get_replies(&parent.id).await?;

    assert!(replies.is_empty());

    Ok(())
}
