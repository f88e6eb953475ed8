//! Comment domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A comment attached to one menu day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub date: NaiveDate,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub visible: bool,
}

impl Comment {
    /// Converts an entity model to a comment domain model.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            author: entity.author,
            text: entity.text,
            created_at: entity.created_at,
            visible: entity.visible,
        }
    }

    /// Converts to the public representation, which exposes only author and
    /// text.
    pub fn into_public_dto(self) -> CommentDto {
        CommentDto {
            author: self.author,
            text: self.text,
        }
    }

    /// Converts to the admin representation, which includes moderation state.
    pub fn into_admin_dto(self) -> AdminCommentDto {
        AdminCommentDto {
            id: self.id,
            date: self.date,
            author: self.author,
            text: self.text,
            created_at: self.created_at,
            visible: self.visible,
        }
    }
}

/// Parameters for creating a comment from a public submission.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub date: NaiveDate,
    pub author: String,
    pub text: String,
}

impl From<CreateCommentDto> for CreateCommentParam {
    fn from(dto: CreateCommentDto) -> Self {
        Self {
            date: dto.date,
            author: dto.author,
            text: dto.text,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub date: NaiveDate,
    pub author: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedCommentDto {
    pub id: i32,
    pub author: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub author: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminCommentDto {
    pub id: i32,
    pub date: NaiveDate,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub visible: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModerateCommentDto {
    pub visible: bool,
}
