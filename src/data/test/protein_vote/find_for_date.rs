use super::*;

/// Tests fetching the vote rows of one date.
///
/// Verifies that only rows with the requested date are returned and rows from
/// neighbouring dates are excluded.
///
/// Expected: Ok with the date's rows only
#[tokio::test]
async fn returns_only_rows_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let other = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    factory::create_like(db, date, "lunch", "protein_1").await?;
    factory::create_like(db, date, "dinner", "vegetarian").await?;
    factory::create_like(db, other, "lunch", "protein_1").await?;

    let repo = ProteinVoteRepository::new(db);
    let votes = repo.find_for_date(date).await?;

    assert_eq!(votes.len(), 2);
    assert!(votes.iter().all(|vote| vote.date == date));

    Ok(())
}

/// Tests fetching votes for a date with none stored.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProteinVoteRepository::new(db);
    let votes = repo
        .find_for_date(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
        .await?;

    assert!(votes.is_empty());

    Ok(())
}
