use crate::server::data::evaluation::EvaluationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests moving an evaluation's comment counter.
///
/// Expected: Ok(true) with the counter adjusted by the delta
#[tokio::test]
async fn updates_comment_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let evaluation = factory::evaluation::EvaluationFactory::new(db, user.id)
        .comment_num(4)
        .build()
        .await?;

    let repo = EvaluationRepository::new(db);
    assert!(repo.update_comment_num(evaluation.id, 1).await?);

    let stored = repo.find_by_id(evaluation.id).await?.unwrap();
    assert_eq!(stored.comment_num, 5);

    Ok(())
}

/// Tests updating the counter of a missing evaluation.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_evaluation_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EvaluationRepository::new(db);
    assert!(!repo.update_comment_num(999, 1).await?);
    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
