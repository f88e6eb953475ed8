//! Comment factory for creating test comment entities.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
    visible: bool,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - date: `2026-01-05`
    /// - author: `"Commenter {id}"` where id is auto-incremented
    /// - text: `"Comment text {id}"`
    /// - created_at: now
    /// - visible: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            author: format!("Commenter {id}"),
            text: format!("Comment text {id}"),
            created_at: Utc::now(),
            visible: true,
        }
    }

    /// Sets the date the comment belongs to.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the author name.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the comment text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the visibility flag.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Inserts the comment into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            date: ActiveValue::Set(self.date),
            author: ActiveValue::Set(self.author),
            text: ActiveValue::Set(self.text),
            created_at: ActiveValue::Set(self.created_at),
            visible: ActiveValue::Set(self.visible),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible comment for the given date with default fields.
pub async fn create_comment(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db).date(date).build().await
}
