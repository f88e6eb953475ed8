use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::vote::{Meal, Polarity, ProteinKey, VoteAction};

/// Result of a vote toggle: which transition was applied and the row that is
/// now active, if any.
pub struct ToggleOutcome {
    pub action: VoteAction,
    pub vote: Option<entity::protein_vote::Model>,
}

pub struct ProteinVoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProteinVoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies one vote-toggle transition for a (date, meal, voter) triple.
    ///
    /// Runs read-then-write inside a single transaction so concurrent votes
    /// from the same voter on the same meal serialize instead of both
    /// observing "no existing vote" and double-inserting. SQLite takes a
    /// write lock for the whole transaction, which gives the required mutual
    /// exclusion.
    ///
    /// Exactly one of three transitions is applied:
    /// - no existing vote: insert a row with the given protein and polarity
    /// - existing vote matches protein and polarity: delete the row (retraction)
    /// - existing vote differs: rewrite it to the new protein and polarity
    ///
    /// # Arguments
    /// - `date`: Menu date the vote refers to (already validated as "today")
    /// - `meal`: Votable meal (lunch or dinner)
    /// - `protein_key`: Protein slot being voted on
    /// - `polarity`: Like or dislike
    /// - `voter_id`: Opaque per-browser voter token
    ///
    /// # Returns
    /// - `Ok(ToggleOutcome)`: Transition applied and the surviving row, if any
    /// - `Err(DbErr)`: Database error; the transaction is rolled back
    pub async fn toggle(
        &self,
        date: NaiveDate,
        meal: Meal,
        protein_key: ProteinKey,
        polarity: Polarity,
        voter_id: &str,
    ) -> Result<ToggleOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::ProteinVote::find()
            .filter(entity::protein_vote::Column::Date.eq(date))
            .filter(entity::protein_vote::Column::Meal.eq(meal.as_str()))
            .filter(entity::protein_vote::Column::VoterId.eq(voter_id))
            .one(&txn)
            .await?;

        let outcome = match existing {
            None => {
                let vote = entity::protein_vote::ActiveModel {
                    date: ActiveValue::Set(date),
                    meal: ActiveValue::Set(meal.as_str().to_string()),
                    protein_key: ActiveValue::Set(protein_key.as_str().to_string()),
                    voter_id: ActiveValue::Set(voter_id.to_string()),
                    polarity: ActiveValue::Set(polarity.as_str().to_string()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                ToggleOutcome {
                    action: VoteAction::Created,
                    vote: Some(vote),
                }
            }
            Some(vote)
                if vote.protein_key == protein_key.as_str()
                    && vote.polarity == polarity.as_str() =>
            {
                entity::prelude::ProteinVote::delete_by_id(vote.id)
                    .exec(&txn)
                    .await?;

                ToggleOutcome {
                    action: VoteAction::Removed,
                    vote: None,
                }
            }
            Some(vote) => {
                let mut active: entity::protein_vote::ActiveModel = vote.into();
                active.protein_key = ActiveValue::Set(protein_key.as_str().to_string());
                active.polarity = ActiveValue::Set(polarity.as_str().to_string());
                let vote = active.update(&txn).await?;

                ToggleOutcome {
                    action: VoteAction::Switched,
                    vote: Some(vote),
                }
            }
        };

        txn.commit().await?;

        Ok(outcome)
    }

    /// Gets all vote rows for one date.
    ///
    /// Used by the per-day aggregation, which is a full rescan on every call.
    ///
    /// # Returns
    /// - `Ok(votes)`: All vote rows for the date
    /// - `Err(DbErr)`: Database error
    pub async fn find_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::protein_vote::Model>, DbErr> {
        entity::prelude::ProteinVote::find()
            .filter(entity::protein_vote::Column::Date.eq(date))
            .all(self.db)
            .await
    }

    /// Gets all like votes with dates inside `[start, end]`, inclusive.
    ///
    /// # Returns
    /// - `Ok(votes)`: Like rows in the range, ordered by date
    /// - `Err(DbErr)`: Database error
    pub async fn likes_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::protein_vote::Model>, DbErr> {
        entity::prelude::ProteinVote::find()
            .filter(entity::protein_vote::Column::Polarity.eq(Polarity::Like.as_str()))
            .filter(entity::protein_vote::Column::Date.between(start, end))
            .order_by_asc(entity::protein_vote::Column::Date)
            .all(self.db)
            .await
    }
}
