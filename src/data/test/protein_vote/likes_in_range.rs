use super::*;
use test_utils::factory::protein_vote::ProteinVoteFactory;

/// Tests fetching like votes inside a date range.
///
/// Verifies that dislikes are filtered out and the range bounds are
/// inclusive on both ends.
///
/// Expected: Ok with only the in-range like rows, ordered by date
#[tokio::test]
async fn returns_likes_within_inclusive_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let wednesday = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let next_monday = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();

    factory::create_like(db, monday, "lunch", "protein_1").await?;
    factory::create_like(db, wednesday, "dinner", "protein_2").await?;
    factory::create_like(db, sunday, "lunch", "vegetarian").await?;
    factory::create_like(db, next_monday, "lunch", "protein_1").await?;

    ProteinVoteFactory::new(db)
        .date(wednesday)
        .polarity("dislike")
        .build()
        .await?;

    let repo = ProteinVoteRepository::new(db);
    let likes = repo.likes_in_range(monday, sunday).await?;

    assert_eq!(likes.len(), 3);
    assert!(likes.iter().all(|vote| vote.polarity == "like"));
    assert_eq!(likes[0].date, monday);
    assert_eq!(likes[1].date, wednesday);
    assert_eq!(likes[2].date, sunday);

    Ok(())
}

/// Tests a range covering no stored votes.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_quiet_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_like(
        db,
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        "lunch",
        "protein_1",
    )
    .await?;

    let repo = ProteinVoteRepository::new(db);
    let likes = repo
        .likes_in_range(
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        )
        .await?;

    assert!(likes.is_empty());

    Ok(())
}
