//! Vote service: the toggle transaction plus per-day aggregation.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::{menu_day::MenuDayRepository, protein_vote::ProteinVoteRepository},
    error::AppError,
    model::{
        menu::MenuDay,
        vote::{
            DailyRankingEntry, Meal, Polarity, ProteinKey, ProteinVote, ToggleVoteParam,
            VoteAction, VoteCounts,
        },
    },
};

/// Everything a vote response needs: the applied transition, the fresh
/// per-day tallies, the named daily ranking and the voter's surviving vote.
pub struct VoteReceipt {
    pub action: VoteAction,
    pub counts: VoteCounts,
    pub daily_ranking: Vec<DailyRankingEntry>,
    pub active_vote: Option<(Meal, ProteinKey, Polarity)>,
}

/// Service providing the vote toggle and per-day aggregation.
pub struct VoteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles a vote and returns the resulting day aggregates.
    ///
    /// The date gate runs before any mutation: votes are only accepted for
    /// the current date in the restaurant's timezone. Aggregates are
    /// recomputed after the toggle transaction commits, so readers never see
    /// a half-applied vote (they may briefly read aggregates that lag a vote
    /// committed by another request, which is acceptable because aggregates
    /// are re-read per request).
    ///
    /// # Arguments
    /// - `param` - Toggle parameters (date, meal, slot, polarity, voter)
    /// - `today` - Current date in the restaurant's timezone
    ///
    /// # Returns
    /// - `Ok(VoteReceipt)` - Applied transition plus fresh aggregates
    /// - `Err(AppError::Forbidden)` - Vote date is not today; nothing mutated
    /// - `Err(AppError::Conflict)` - Duplicate-row race surfaced; retryable
    /// - `Err(AppError::DbErr)` - Database error; transaction rolled back
    pub async fn toggle(
        &self,
        param: ToggleVoteParam,
        today: NaiveDate,
    ) -> Result<VoteReceipt, AppError> {
        if param.date != today {
            tracing::warn!(
                date = %param.date,
                %today,
                voter_id = %param.voter_id,
                "Rejected vote for a date other than today"
            );
            return Err(AppError::Forbidden(
                "Voting is only allowed on today's menu.".to_string(),
            ));
        }

        let outcome = ProteinVoteRepository::new(self.db)
            .toggle(
                param.date,
                param.meal,
                param.protein_key,
                param.polarity,
                &param.voter_id,
            )
            .await
            .map_err(Self::classify_toggle_err)?;

        tracing::info!(
            date = %param.date,
            meal = param.meal.as_str(),
            protein_key = param.protein_key.as_str(),
            voter_id = %param.voter_id,
            action = ?outcome.action,
            "Vote toggled"
        );

        let active_vote = outcome
            .vote
            .map(ProteinVote::from_entity)
            .transpose()?
            .map(|vote| (vote.meal, vote.protein_key, vote.polarity));

        // Post-commit rescan; never inside the toggle transaction.
        let counts = self.counts_for_date(param.date).await?;

        let menu = MenuDayRepository::new(self.db)
            .find_by_date(param.date)
            .await?
            .map(MenuDay::from_entity);

        let daily_ranking = DailyRankingEntry::resolve(counts.daily_ranking(), menu.as_ref());

        Ok(VoteReceipt {
            action: outcome.action,
            counts,
            daily_ranking,
            active_vote,
        })
    }

    /// Classifies a toggle failure.
    ///
    /// A unique-constraint violation means a concurrent insert for the same
    /// (date, meal, voter) triple slipped past the toggle's lookup and hit
    /// the backstop index, which the client may simply retry. Everything else
    /// passes through as a database error.
    pub(super) fn classify_toggle_err(err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(
                "Another vote for this meal was applied concurrently. Try again.".to_string(),
            ),
            _ => AppError::from(err),
        }
    }

    /// Computes dense vote tallies for one date by rescanning its rows.
    ///
    /// All six (meal x protein-slot) cells are present in the result, zero
    /// when no votes exist. No incremental state is kept: per-day volume is
    /// small and a full rescan stays correct under concurrent toggles.
    ///
    /// # Returns
    /// - `Ok(VoteCounts)` - Dense tallies for the date
    /// - `Err(AppError)` - Database error or unparseable stored vote row
    pub async fn counts_for_date(&self, date: NaiveDate) -> Result<VoteCounts, AppError> {
        let rows = ProteinVoteRepository::new(self.db)
            .find_for_date(date)
            .await?;

        let mut counts = VoteCounts::default();
        for row in rows {
            let vote = ProteinVote::from_entity(row)?;
            counts.record(vote.meal, vote.protein_key, vote.polarity);
        }

        Ok(counts)
    }
}
