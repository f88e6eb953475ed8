use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MenuDayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuDayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or fully replaces the menus for one date.
    ///
    /// When a row for the date exists, all three meal columns are overwritten
    /// with the new payloads; nothing is merged field-by-field. Concurrent
    /// upserts to the same date resolve by last-write-wins.
    ///
    /// # Arguments
    /// - `date`: Calendar date being published
    /// - `breakfast`, `lunch`, `dinner`: JSON-encoded meal payloads
    ///
    /// # Returns
    /// - `Ok((menu, created))`: The stored row and whether it was newly created
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        date: NaiveDate,
        breakfast: Option<String>,
        lunch: Option<String>,
        dinner: Option<String>,
    ) -> Result<(entity::menu_day::Model, bool), DbErr> {
        let existing = self.find_by_date(date).await?;

        match existing {
            Some(menu) => {
                let mut active: entity::menu_day::ActiveModel = menu.into();
                active.breakfast = ActiveValue::Set(breakfast);
                active.lunch = ActiveValue::Set(lunch);
                active.dinner = ActiveValue::Set(dinner);
                let menu = active.update(self.db).await?;

                Ok((menu, false))
            }
            None => {
                let menu = entity::menu_day::ActiveModel {
                    date: ActiveValue::Set(date),
                    breakfast: ActiveValue::Set(breakfast),
                    lunch: ActiveValue::Set(lunch),
                    dinner: ActiveValue::Set(dinner),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;

                Ok((menu, true))
            }
        }
    }

    /// Gets the menu row for one date.
    ///
    /// # Returns
    /// - `Ok(Some(menu))`: Menu found
    /// - `Ok(None)`: No menu published for this date
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<entity::menu_day::Model>, DbErr> {
        entity::prelude::MenuDay::find()
            .filter(entity::menu_day::Column::Date.eq(date))
            .one(self.db)
            .await
    }

    /// Gets all menu rows with dates inside `[start, end]`, ordered by date.
    ///
    /// # Returns
    /// - `Ok(menus)`: Menus in the range, earliest first
    /// - `Err(DbErr)`: Database error
    pub async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::menu_day::Model>, DbErr> {
        entity::prelude::MenuDay::find()
            .filter(entity::menu_day::Column::Date.between(start, end))
            .order_by_asc(entity::menu_day::Column::Date)
            .all(self.db)
            .await
    }
}
