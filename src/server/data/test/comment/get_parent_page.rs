use super::*;

/// Tests ordering of a page of parent comments.
///
/// Verifies comments are returned newest first, with the id as tie-break for
/// identical timestamps.
///
/// Expected: Ok with comments ordered by created_at desc, id desc
#[tokio::test]
async fn returns_newest_first_with_id_tie_break() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let now = Utc::now();

    for (id, age) in [("a", 2), ("b", 1), ("c", 1), ("d", 3)] {
        ParentCommentFactory::new(db, evaluation.id, author.id)
            .id(id)
            .created_at(now - Duration::minutes(age))
            .build()
            .await?;
    }

    let repo = CommentRepository::new(db);
    let (comments, total) = repo.get_parent_page(evaluation.id, 10, 0).await?;

    let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a", "d"]);
    assert_eq!(total, 4);

    Ok(())
}

/// Tests that the total is independent of limit and offset.
///
/// Expected: Ok with total 5 for every window
#[tokio::test]
async fn total_ignores_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    for _ in 0..5 {
        factory::create_parent_comment(db, evaluation.id, author.id).await?;
    }

    let repo = CommentRepository::new(db);
    for (limit, offset, expected_len) in [(2, 0, 2), (2, 4, 1), (20, 0, 5), (5, 9, 0)] {
        let (comments, total) = repo.get_parent_page(evaluation.id, limit, offset).await?;
        assert_eq!(total, 5);
        assert_eq!(comments.len(), expected_len);
    }

    Ok(())
}

/// Tests that invalidated comments and other evaluations are excluded.
///
/// Expected: Ok with only the valid comment of the requested evaluation
#[tokio::test]
async fn excludes_invalid_and_foreign_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (author, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;
    let other_evaluation = factory::create_evaluation(db, author.id).await?;

    let kept = factory::create_parent_comment(db, evaluation.id, author.id).await?;
    ParentCommentFactory::new(db, evaluation.id, author.id)
        .valid(false)
        .build()
        .await?;
    factory::create_parent_comment(db, other_evaluation.id, author.id).await?;

    let (comments, total) = CommentRepository::new(db)
        .get_parent_page(evaluation.id, 20, 0)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, kept.id);

    Ok(())
}

/// Tests an evaluation without comments.
///
/// Expected: Ok with an empty page and total 0
#[tokio::test]
async fn empty_evaluation_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, evaluation) = factory::helpers::create_evaluation_with_author(db).await?;

    let (comments, total) = CommentRepository::new(db)
        .get_parent_page(evaluation.id, 20, 0)
        .await?;

    assert!(comments.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
