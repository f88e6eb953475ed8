use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{api::ErrorDto, vote::WeeklyRankingEntry},
    service::ranking::RankingService,
    state::AppState,
    util::clock,
};

/// Tag for grouping ranking endpoints in OpenAPI documentation
pub static RANKING_TAG: &str = "ranking";

/// Get the weekly dish ranking.
///
/// Returns the top dishes by like count for the week containing today
/// (Monday through Sunday) in the restaurant's timezone. Likes are resolved
/// to dish names through the published menus; dishes sharing a name across
/// days merge into one entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - At most five ranked dishes, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/weekly_ranking",
    tag = RANKING_TAG,
    responses(
        (status = 200, description = "Weekly dish ranking", body = Vec<WeeklyRankingEntry>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_weekly_ranking(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let today = clock::today_in(state.timezone);

    let entries = RankingService::new(&state.db).weekly_top(today).await?;

    Ok((StatusCode::OK, Json(entries)))
}
