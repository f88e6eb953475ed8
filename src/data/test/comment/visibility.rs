use super::*;
use chrono::{Duration, Utc};

/// Tests hiding a comment.
///
/// Verifies that the visibility flag flips and the row survives.
///
/// Expected: Ok(Some) with visible = false
#[tokio::test]
async fn hides_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let comment = factory::create_comment(db, date).await?;

    let repo = CommentRepository::new(db);
    let updated = repo.set_visibility(comment.id, false).await?;

    assert!(updated.is_some());
    assert!(!updated.unwrap().visible);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.visible);

    Ok(())
}

/// Tests restoring a hidden comment.
///
/// Expected: Ok(Some) with visible = true
#[tokio::test]
async fn restores_hidden_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let comment = CommentFactory::new(db)
        .date(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
        .visible(false)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let updated = repo.set_visibility(comment.id, true).await?;

    assert!(updated.unwrap().visible);

    Ok(())
}

/// Tests setting visibility on a missing comment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let updated = repo.set_visibility(9999, false).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests the public listing of one date's comments.
///
/// Verifies that hidden comments and other dates are excluded and ordering
/// is oldest first.
///
/// Expected: Ok with only visible comments in creation order
#[tokio::test]
async fn lists_visible_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let earlier = Utc::now() - Duration::hours(2);

    let old = CommentFactory::new(db)
        .date(date)
        .created_at(earlier)
        .build()
        .await?;
    let new = factory::create_comment(db, date).await?;
    CommentFactory::new(db).date(date).visible(false).build().await?;
    factory::create_comment(db, NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.visible_for_date(date).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, old.id);
    assert_eq!(comments[1].id, new.id);

    Ok(())
}

/// Tests the moderation listing of one date's comments.
///
/// Verifies that hidden comments are included and ordering is newest first.
///
/// Expected: Ok with every comment for the date
#[tokio::test]
async fn lists_all_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let earlier = Utc::now() - Duration::hours(2);

    let old = CommentFactory::new(db)
        .date(date)
        .created_at(earlier)
        .build()
        .await?;
    let hidden = CommentFactory::new(db).date(date).visible(false).build().await?;

    let repo = CommentRepository::new(db);
    let comments = repo.all_for_date(date).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, hidden.id);
    assert_eq!(comments[1].id, old.id);

    Ok(())
}
