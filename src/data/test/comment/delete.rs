use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok(true) with the row gone
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let comment = factory::create_comment(db, date).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(comment.id).await?;

    assert!(deleted);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a missing comment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting one comment leaves others intact.
///
/// Expected: Ok with the other comment still stored
#[tokio::test]
async fn leaves_other_comments_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let doomed = factory::create_comment(db, date).await?;
    let kept = factory::create_comment(db, date).await?;

    let repo = CommentRepository::new(db);
    repo.delete(doomed.id).await?;

    let count = entity::prelude::Comment::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = entity::prelude::Comment::find_by_id(kept.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
