use super::*;

/// Tests creating a comment.
///
/// Verifies that the stored row carries the given fields, is visible by
/// default and has a creation timestamp.
///
/// Expected: Ok with visible comment created
#[tokio::test]
async fn creates_visible_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = CommentRepository::new(db);

    let comment = repo
        .create(date, "Maria".to_string(), "The stew was great.".to_string())
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.date, date);
    assert_eq!(comment.author, "Maria");
    assert_eq!(comment.text, "The stew was great.");
    assert!(comment.visible);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating several comments on the same date.
///
/// Expected: Ok with distinct ids for each comment
#[tokio::test]
async fn creates_multiple_comments_for_same_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = CommentRepository::new(db);

    let first = repo
        .create(date, "Maria".to_string(), "Loved it.".to_string())
        .await?;
    let second = repo
        .create(date, "Pedro".to_string(), "Too salty.".to_string())
        .await?;

    assert_ne!(first.id, second.id);

    let count = entity::prelude::Comment::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
