//! Menu service: publication upsert plus day and week view assembly.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    data::{comment::CommentRepository, menu_day::MenuDayRepository},
    error::AppError,
    model::{
        comment::Comment,
        menu::{DayView, MenuDay, UpsertMenuParam},
        vote::DailyRankingEntry,
    },
    service::vote::VoteService,
    util::clock,
};

/// Service providing menu publication and the assembled public views.
pub struct MenuService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes or fully replaces the menus for one date.
    ///
    /// Replacement is whole-row: upserting a date with only breakfast
    /// populated clears any previously stored lunch/dinner content. Payloads
    /// are stored verbatim without field validation.
    ///
    /// # Returns
    /// - `Ok(true)` - A new menu day was created
    /// - `Ok(false)` - An existing menu day was replaced
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, param: UpsertMenuParam) -> Result<bool, AppError> {
        let (menu, created) = MenuDayRepository::new(self.db)
            .upsert(
                param.date,
                encode_meal(param.breakfast),
                encode_meal(param.lunch),
                encode_meal(param.dinner),
            )
            .await?;

        tracing::info!(date = %menu.date, created, "Menu published");

        Ok(created)
    }

    /// Assembles the full public view of one date.
    ///
    /// # Returns
    /// - `Ok(Some(DayView))` - Menu with visible comments, tallies and ranking
    /// - `Ok(None)` - No menu published for this date
    /// - `Err(AppError)` - Database error
    pub async fn day_view(&self, date: NaiveDate) -> Result<Option<DayView>, AppError> {
        let Some(menu) = MenuDayRepository::new(self.db).find_by_date(date).await? else {
            return Ok(None);
        };

        Ok(Some(self.assemble(menu).await?))
    }

    /// Assembles the public views for the serving days (Monday-Friday) of the
    /// week containing `today`, ordered by date. Days without a published
    /// menu are skipped.
    ///
    /// # Returns
    /// - `Ok(days)` - One view per published weekday menu
    /// - `Err(AppError)` - Database error
    pub async fn week_view(&self, today: NaiveDate) -> Result<Vec<DayView>, AppError> {
        let (monday, friday) = clock::weekday_span(today);

        let menus = MenuDayRepository::new(self.db)
            .find_in_range(monday, friday)
            .await?;

        let mut days = Vec::with_capacity(menus.len());
        for menu in menus {
            days.push(self.assemble(menu).await?);
        }

        Ok(days)
    }

    async fn assemble(&self, entity: entity::menu_day::Model) -> Result<DayView, AppError> {
        let date = entity.date;
        let menu = MenuDay::from_entity(entity);

        let comments = CommentRepository::new(self.db)
            .visible_for_date(date)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        let vote_counts = VoteService::new(self.db).counts_for_date(date).await?;
        let daily_ranking = DailyRankingEntry::resolve(vote_counts.daily_ranking(), Some(&menu));

        Ok(DayView {
            date,
            menu,
            comments,
            vote_counts,
            daily_ranking,
        })
    }
}

/// Encodes one meal payload for storage. `null` payloads are stored as an
/// unpublished meal rather than the literal string "null".
fn encode_meal(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        value => Some(value.to_string()),
    }
}
