use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new visible comment for one date.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created comment
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        date: NaiveDate,
        author: String,
        text: String,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            date: ActiveValue::Set(date),
            author: ActiveValue::Set(author),
            text: ActiveValue::Set(text),
            created_at: ActiveValue::Set(Utc::now()),
            visible: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the visible comments for one date, oldest first.
    ///
    /// # Returns
    /// - `Ok(comments)`: Visible comments for the public view
    /// - `Err(DbErr)`: Database error
    pub async fn visible_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::Date.eq(date))
            .filter(entity::comment::Column::Visible.eq(true))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets all comments for one date including hidden ones, newest first.
    ///
    /// # Returns
    /// - `Ok(comments)`: Every comment for the moderation view
    /// - `Err(DbErr)`: Database error
    pub async fn all_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::Date.eq(date))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets the visibility flag of one comment.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated comment
    /// - `Ok(None)`: No comment with this id
    /// - `Err(DbErr)`: Database error
    pub async fn set_visibility(
        &self,
        id: i32,
        visible: bool,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.visible = ActiveValue::Set(visible);

        Ok(Some(active.update(self.db).await?))
    }

    /// Permanently deletes one comment.
    ///
    /// # Returns
    /// - `Ok(true)`: Comment deleted
    /// - `Ok(false)`: No comment with this id
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
