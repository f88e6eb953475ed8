//! Menu day factory for creating test menu entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::next_id;

/// Factory for creating test menu days with customizable meal payloads.
///
/// Meal columns are stored as raw JSON text, so the `*_raw` setters can be
/// used to simulate corrupt stored payloads.
///
/// # Example
///
/// ```rust,ignore
/// let menu = MenuDayFactory::new(&db)
///     .date(date)
///     .lunch(json!({"protein_1": "Grilled Chicken"}))
///     .build()
///     .await?;
/// ```
pub struct MenuDayFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    breakfast: Option<String>,
    lunch: Option<String>,
    dinner: Option<String>,
}

impl<'a> MenuDayFactory<'a> {
    /// Creates a new MenuDayFactory with default values.
    ///
    /// Defaults:
    /// - date: a unique date derived from the factory counter
    /// - breakfast: bread and coffee
    /// - lunch / dinner: three populated protein slots plus a salad
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let date = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(id))
            .unwrap();
        Self {
            db,
            date,
            breakfast: Some(json!({"bread": "Rolls", "drink": "Coffee"}).to_string()),
            lunch: Some(
                json!({
                    "protein_1": format!("Lunch Protein {id}"),
                    "protein_2": format!("Lunch Stew {id}"),
                    "vegetarian": format!("Lunch Veggie {id}"),
                    "salad": "Green Salad"
                })
                .to_string(),
            ),
            dinner: Some(
                json!({
                    "protein_1": format!("Dinner Protein {id}"),
                    "protein_2": format!("Dinner Stew {id}"),
                    "vegetarian": format!("Dinner Veggie {id}"),
                    "salad": "Coleslaw"
                })
                .to_string(),
            ),
        }
    }

    /// Sets the menu date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the breakfast payload from a JSON value.
    pub fn breakfast(mut self, value: serde_json::Value) -> Self {
        self.breakfast = Some(value.to_string());
        self
    }

    /// Sets the lunch payload from a JSON value.
    pub fn lunch(mut self, value: serde_json::Value) -> Self {
        self.lunch = Some(value.to_string());
        self
    }

    /// Sets the dinner payload from a JSON value.
    pub fn dinner(mut self, value: serde_json::Value) -> Self {
        self.dinner = Some(value.to_string());
        self
    }

    /// Sets the raw lunch column text, bypassing JSON encoding.
    ///
    /// Pass invalid JSON to simulate a corrupt stored meal.
    pub fn lunch_raw(mut self, raw: Option<String>) -> Self {
        self.lunch = raw;
        self
    }

    /// Sets the raw dinner column text, bypassing JSON encoding.
    pub fn dinner_raw(mut self, raw: Option<String>) -> Self {
        self.dinner = raw;
        self
    }

    /// Inserts the menu day into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created menu day entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::menu_day::Model, DbErr> {
        entity::menu_day::ActiveModel {
            date: ActiveValue::Set(self.date),
            breakfast: ActiveValue::Set(self.breakfast),
            lunch: ActiveValue::Set(self.lunch),
            dinner: ActiveValue::Set(self.dinner),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu day for the given date with default meal payloads.
pub async fn create_menu_day(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<entity::menu_day::Model, DbErr> {
    MenuDayFactory::new(db).date(date).build().await
}
