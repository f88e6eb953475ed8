use super::*;

/// Tests toggling when the voter has no existing vote for the meal.
///
/// Verifies that the toggle inserts a new row carrying the requested protein
/// slot and polarity.
///
/// Expected: Ok with Created action and one stored row
#[tokio::test]
async fn creates_vote_when_none_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    let outcome = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;

    assert_eq!(outcome.action, VoteAction::Created);
    let vote = outcome.vote.unwrap();
    assert_eq!(vote.date, date);
    assert_eq!(vote.meal, "lunch");
    assert_eq!(vote.protein_key, "protein_1");
    assert_eq!(vote.polarity, "like");
    assert_eq!(vote.voter_id, "voter_a");

    let count = entity::prelude::ProteinVote::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests toggling with the exact same protein slot and polarity again.
///
/// Verifies that repeating an identical vote retracts it, leaving no row for
/// the (date, meal, voter) triple.
///
/// Expected: Ok with Removed action and zero stored rows
#[tokio::test]
async fn removes_identical_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    repo.toggle(date, Meal::Dinner, ProteinKey::Vegetarian, Polarity::Like, "voter_a")
        .await?;
    let outcome = repo
        .toggle(date, Meal::Dinner, ProteinKey::Vegetarian, Polarity::Like, "voter_a")
        .await?;

    assert_eq!(outcome.action, VoteAction::Removed);
    assert!(outcome.vote.is_none());

    let count = entity::prelude::ProteinVote::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests toggling with a different polarity on the same slot.
///
/// Verifies that the existing row is rewritten in place rather than
/// accumulating a second vote for the meal.
///
/// Expected: Ok with Switched action and the row updated
#[tokio::test]
async fn switches_polarity_on_same_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    let first = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein2, Polarity::Like, "voter_a")
        .await?;
    let outcome = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein2, Polarity::Dislike, "voter_a")
        .await?;

    assert_eq!(outcome.action, VoteAction::Switched);
    let vote = outcome.vote.unwrap();
    assert_eq!(vote.id, first.vote.unwrap().id);
    assert_eq!(vote.protein_key, "protein_2");
    assert_eq!(vote.polarity, "dislike");

    let count = entity::prelude::ProteinVote::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests toggling to a different protein slot within the same meal.
///
/// Verifies that moving the vote to another slot rewrites the existing row,
/// so a voter never holds two votes for one meal.
///
/// Expected: Ok with Switched action and a single stored row
#[tokio::test]
async fn switches_to_different_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    repo.toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;
    let outcome = repo
        .toggle(date, Meal::Lunch, ProteinKey::Vegetarian, Polarity::Like, "voter_a")
        .await?;

    assert_eq!(outcome.action, VoteAction::Switched);
    let vote = outcome.vote.unwrap();
    assert_eq!(vote.protein_key, "vegetarian");
    assert_eq!(vote.polarity, "like");

    let count = entity::prelude::ProteinVote::find()
        .filter(entity::protein_vote::Column::VoterId.eq("voter_a"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a full insert, retract, re-insert cycle.
///
/// Verifies that a retracted vote can be cast again and lands as a fresh row.
///
/// Expected: Ok with Created, Removed, Created actions in sequence
#[tokio::test]
async fn supports_insert_remove_insert_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    let first = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;
    assert_eq!(first.action, VoteAction::Created);

    let second = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;
    assert_eq!(second.action, VoteAction::Removed);

    let third = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;
    assert_eq!(third.action, VoteAction::Created);

    let count = entity::prelude::ProteinVote::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the meals of one day are voted independently.
///
/// Verifies that a lunch vote does not interfere with a dinner vote from the
/// same voter on the same date.
///
/// Expected: Ok with two stored rows, one per meal
#[tokio::test]
async fn treats_meals_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    let lunch = repo
        .toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;
    let dinner = repo
        .toggle(date, Meal::Dinner, ProteinKey::Protein1, Polarity::Dislike, "voter_a")
        .await?;

    assert_eq!(lunch.action, VoteAction::Created);
    assert_eq!(dinner.action, VoteAction::Created);

    let count = entity::prelude::ProteinVote::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that different voters hold votes side by side.
///
/// Verifies that one voter's toggle never touches another voter's row for
/// the same date and meal.
///
/// Expected: Ok with one row per voter
#[tokio::test]
async fn keeps_voters_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProteinVote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let repo = ProteinVoteRepository::new(db);

    repo.toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;
    repo.toggle(date, Meal::Lunch, ProteinKey::Protein2, Polarity::Like, "voter_b")
        .await?;

    // Retract only voter_a's vote
    repo.toggle(date, Meal::Lunch, ProteinKey::Protein1, Polarity::Like, "voter_a")
        .await?;

    let remaining = entity::prelude::ProteinVote::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].voter_id, "voter_b");
    assert_eq!(remaining[0].protein_key, "protein_2");

    Ok(())
}
