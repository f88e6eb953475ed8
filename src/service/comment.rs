//! Comment service: public submission plus moderation.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{Comment, CreateCommentParam},
};

/// Service providing public comment submission and admin moderation.
pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a visible comment for one date.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::BadRequest)` - Author or text is blank
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        let author = param.author.trim();
        let text = param.text.trim();

        if author.is_empty() || text.is_empty() {
            return Err(AppError::BadRequest(
                "Comment author and text must not be blank.".to_string(),
            ));
        }

        let model = CommentRepository::new(self.db)
            .create(param.date, author.to_string(), text.to_string())
            .await?;

        tracing::info!(id = model.id, date = %model.date, "Comment created");

        Ok(Comment::from_entity(model))
    }

    /// Gets the visible comments for one date, oldest first.
    pub async fn visible_for_date(&self, date: NaiveDate) -> Result<Vec<Comment>, AppError> {
        let comments = CommentRepository::new(self.db)
            .visible_for_date(date)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        Ok(comments)
    }

    /// Gets every comment for one date including hidden ones, newest first.
    pub async fn all_for_date(&self, date: NaiveDate) -> Result<Vec<Comment>, AppError> {
        let comments = CommentRepository::new(self.db)
            .all_for_date(date)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        Ok(comments)
    }

    /// Sets the visibility flag of one comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(AppError::NotFound)` - No comment with this id
    /// - `Err(AppError)` - Database error
    pub async fn moderate(&self, id: i32, visible: bool) -> Result<Comment, AppError> {
        let Some(model) = CommentRepository::new(self.db)
            .set_visibility(id, visible)
            .await?
        else {
            return Err(AppError::NotFound(format!("Comment {id} not found.")));
        };

        tracing::info!(id, visible, "Comment visibility changed");

        Ok(Comment::from_entity(model))
    }

    /// Permanently deletes one comment.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with this id
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Comment {id} not found.")));
        }

        tracing::info!(id, "Comment deleted");

        Ok(())
    }
}
