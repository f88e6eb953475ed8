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
        api::{ErrorDto, MessageDto},
        menu::{DayDto, DayView, UpsertMenuDto},
    },
    service::menu::MenuService,
    state::AppState,
    util::clock,
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// Get the published menus for the current week.
///
/// Returns one entry per published weekday (Monday through Friday) of the
/// week containing today in the restaurant's timezone. Each entry carries the
/// menu, its visible comments, the vote tallies and the daily ranking.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Published weekday menus, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/week",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Published menus for the current week", body = Vec<DayDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_week(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let today = clock::today_in(state.timezone);

    let days = MenuService::new(&state.db).week_view(today).await?;

    Ok((
        StatusCode::OK,
        Json(days.into_iter().map(DayView::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get the full public view of one date.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `date` - Calendar date in ISO 8601 form (YYYY-MM-DD)
///
/// # Returns
/// - `200 OK` - Menu with visible comments, tallies and daily ranking
/// - `404 Not Found` - No menu published for this date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/day/{date}",
    tag = MENU_TAG,
    params(
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Full view of the requested day", body = DayDto),
        (status = 404, description = "No menu published for this date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<impl IntoResponse, AppError> {
    let day = MenuService::new(&state.db).day_view(date).await?;

    match day {
        Some(day) => Ok((StatusCode::OK, Json(day.into_dto()))),
        None => Err(AppError::NotFound(format!("No menu published for {date}."))),
    }
}

/// Publish or replace the menus for one date.
///
/// Whole-day replacement: the three meal payloads in the request become the
/// stored state for the date, and meals omitted from the request are cleared.
/// Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Requires a valid bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Menu data (date plus breakfast/lunch/dinner payloads)
///
/// # Returns
/// - `201 Created` - Menu published for a new date
/// - `200 OK` - Existing menu replaced
/// - `400 Bad Request` - Malformed request body
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/menu",
    tag = MENU_TAG,
    request_body = UpsertMenuDto,
    responses(
        (status = 201, description = "Menu published", body = MessageDto),
        (status = 200, description = "Menu replaced", body = MessageDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upsert_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
    BodyJson(payload): BodyJson<UpsertMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt_secret).require(&headers)?;

    let created = MenuService::new(&state.db).upsert(payload.into()).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(MessageDto {
            message: "Menu saved.".to_string(),
        }),
    ))
}
