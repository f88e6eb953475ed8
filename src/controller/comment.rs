use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::{
    controller::extract::BodyJson,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        comment::{
            AdminCommentDto, Comment, CreateCommentDto, CreatedCommentDto, ModerateCommentDto,
        },
    },
    service::comment::CommentService,
    state::AppState,
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Submit a public comment on one menu day.
///
/// Comments are visible immediately; moderation is reactive through the admin
/// surface.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Comment data (date, author, text)
///
/// # Returns
/// - `201 Created` - Comment stored
/// - `400 Bad Request` - Malformed body or blank author or text
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comment",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CreatedCommentDto),
        (status = 400, description = "Malformed body or blank author or text", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    BodyJson(payload): BodyJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db).create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedCommentDto {
            id: comment.id,
            author: comment.author,
            text: comment.text,
        }),
    ))
}

/// Get every comment for one date, hidden ones included.
///
/// Returns the moderation view, newest first. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `date` - Calendar date in ISO 8601 form (YYYY-MM-DD)
///
/// # Returns
/// - `200 OK` - Every comment for the date
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/comments/{date}",
    tag = COMMENT_TAG,
    params(
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Every comment for the date", body = Vec<AdminCommentDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_comments_for_moderation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(date): Path<NaiveDate>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret).require(&headers)?;

    let comments = CommentService::new(&state.db).all_for_date(date).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(Comment::into_admin_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Set the visibility of one comment.
///
/// Hidden comments stay stored and remain visible on the moderation view but
/// disappear from the public day view. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Comment id
/// - `payload` - The new visibility flag
///
/// # Returns
/// - `200 OK` - Visibility updated
/// - `400 Bad Request` - Malformed request body
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No comment with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/comment/{id}/visibility",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    request_body = ModerateCommentDto,
    responses(
        (status = 200, description = "Visibility updated", body = AdminCommentDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn moderate_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    BodyJson(payload): BodyJson<ModerateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret).require(&headers)?;

    let comment = CommentService::new(&state.db)
        .moderate(id, payload.visible)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_admin_dto())))
}

/// Permanently delete one comment.
///
/// Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Comment id
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No comment with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/comment/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret).require(&headers)?;

    CommentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
