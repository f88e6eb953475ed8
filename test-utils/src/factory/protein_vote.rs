//! Protein vote factory for creating test vote entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test protein votes with customizable fields.
///
/// Meal, protein key and polarity are raw stored strings so tests can also
/// exercise how the application treats unexpected values.
pub struct ProteinVoteFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    meal: String,
    protein_key: String,
    voter_id: String,
    polarity: String,
}

impl<'a> ProteinVoteFactory<'a> {
    /// Creates a new ProteinVoteFactory with default values.
    ///
    /// Defaults:
    /// - date: `2026-01-05`
    /// - meal: `"lunch"`
    /// - protein_key: `"protein_1"`
    /// - voter_id: `"voter_{id}"` where id is auto-incremented
    /// - polarity: `"like"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            meal: "lunch".to_string(),
            protein_key: "protein_1".to_string(),
            voter_id: format!("voter_{id}"),
            polarity: "like".to_string(),
        }
    }

    /// Sets the vote date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the stored meal name.
    pub fn meal(mut self, meal: impl Into<String>) -> Self {
        self.meal = meal.into();
        self
    }

    /// Sets the stored protein slot name.
    pub fn protein_key(mut self, protein_key: impl Into<String>) -> Self {
        self.protein_key = protein_key.into();
        self
    }

    /// Sets the voter identifier.
    pub fn voter_id(mut self, voter_id: impl Into<String>) -> Self {
        self.voter_id = voter_id.into();
        self
    }

    /// Sets the stored polarity.
    pub fn polarity(mut self, polarity: impl Into<String>) -> Self {
        self.polarity = polarity.into();
        self
    }

    /// Inserts the vote into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created vote entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::protein_vote::Model, DbErr> {
        entity::protein_vote::ActiveModel {
            date: ActiveValue::Set(self.date),
            meal: ActiveValue::Set(self.meal),
            protein_key: ActiveValue::Set(self.protein_key),
            voter_id: ActiveValue::Set(self.voter_id),
            polarity: ActiveValue::Set(self.polarity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a like vote for the given date, meal and protein slot from a fresh
/// unique voter.
pub async fn create_like(
    db: &DatabaseConnection,
    date: NaiveDate,
    meal: &str,
    protein_key: &str,
) -> Result<entity::protein_vote::Model, DbErr> {
    ProteinVoteFactory::new(db)
        .date(date)
        .meal(meal)
        .protein_key(protein_key)
        .build()
        .await
}
