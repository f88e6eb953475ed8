//! Weekly ranking: like votes resolved to dish names across a whole week.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{menu_day::MenuDayRepository, protein_vote::ProteinVoteRepository},
    error::AppError,
    model::{
        menu::MenuDay,
        vote::{ProteinVote, WeeklyRankingEntry},
    },
    util::clock,
};

const WEEKLY_TOP_LEN: usize = 5;

/// Service computing the weekly dish ranking.
pub struct RankingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RankingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the top dishes by like count for the week containing `today`
    /// (Monday through Sunday).
    ///
    /// Each like vote is resolved to a dish name through the menu published
    /// for the vote's date. Votes that cannot be attributed to a dish, for
    /// example when the menu was unpublished or replaced after voting, are
    /// dropped from the ranking. Dishes sharing a name across days merge
    /// into one entry. Results are ordered by like count descending with
    /// name as the tiebreaker, truncated to the top five.
    ///
    /// # Returns
    /// - `Ok(entries)` - At most five ranked dishes; empty when no
    ///   attributable likes exist
    /// - `Err(AppError)` - Database error or unparseable stored vote row
    pub async fn weekly_top(&self, today: NaiveDate) -> Result<Vec<WeeklyRankingEntry>, AppError> {
        let (monday, sunday) = clock::week_bounds(today);

        let likes = ProteinVoteRepository::new(self.db)
            .likes_in_range(monday, sunday)
            .await?;

        let menus: HashMap<NaiveDate, MenuDay> = MenuDayRepository::new(self.db)
            .find_in_range(monday, sunday)
            .await?
            .into_iter()
            .map(|model| (model.date, MenuDay::from_entity(model)))
            .collect();

        let mut totals: HashMap<String, u64> = HashMap::new();
        for row in likes {
            let vote = ProteinVote::from_entity(row)?;

            let name = menus
                .get(&vote.date)
                .and_then(|menu| menu.meal(vote.meal).dish(vote.protein_key));

            match name {
                Some(name) => *totals.entry(name.to_string()).or_default() += 1,
                None => {
                    tracing::warn!(
                        date = %vote.date,
                        meal = vote.meal.as_str(),
                        protein_key = vote.protein_key.as_str(),
                        "Dropping like vote with no matching dish in the published menu"
                    );
                }
            }
        }

        let mut entries: Vec<WeeklyRankingEntry> = totals
            .into_iter()
            .map(|(name, total_likes)| WeeklyRankingEntry { name, total_likes })
            .collect();

        entries.sort_by(|a, b| {
            b.total_likes
                .cmp(&a.total_likes)
                .then_with(|| a.name.cmp(&b.name))
        });
        entries.truncate(WEEKLY_TOP_LEN);

        Ok(entries)
    }
}
