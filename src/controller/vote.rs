use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::extract::BodyJson,
    error::AppError,
    model::{
        api::ErrorDto,
        vote::{ActiveVoteDto, VoteRequestDto, VoteResponseDto},
    },
    service::vote::VoteService,
    state::AppState,
    util::clock,
};

/// Tag for grouping vote endpoints in OpenAPI documentation
pub static VOTE_TAG: &str = "vote";

/// Toggle a protein vote for today's menu.
///
/// Applies the single-vote-per-meal rule for the submitting voter: a first
/// vote is recorded, an identical repeat vote is retracted, and a vote for a
/// different slot or polarity replaces the previous one. The response carries
/// the applied transition, the refreshed per-day tallies, the daily ranking
/// and the voter's surviving vote.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Vote data (date, meal, protein slot, polarity, voter id)
///
/// # Returns
/// - `200 OK` - Vote toggled; response carries the refreshed aggregates
/// - `400 Bad Request` - Malformed body, such as an unknown meal or polarity
/// - `403 Forbidden` - Vote date is not today in the restaurant's timezone
/// - `409 Conflict` - Concurrent duplicate vote; the client may retry
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/vote",
    tag = VOTE_TAG,
    request_body = VoteRequestDto,
    responses(
        (status = 200, description = "Vote toggled", body = VoteResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 403, description = "Vote date is not today", body = ErrorDto),
        (status = 409, description = "Concurrent duplicate vote", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_vote(
    State(state): State<AppState>,
    BodyJson(payload): BodyJson<VoteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let today = clock::today_in(state.timezone);

    let receipt = VoteService::new(&state.db)
        .toggle(payload.into(), today)
        .await?;

    let response = VoteResponseDto {
        message: receipt.action.message().to_string(),
        counts: receipt.counts,
        daily_ranking: receipt.daily_ranking,
        active_vote: receipt
            .active_vote
            .map(|(meal, protein_key, polarity)| ActiveVoteDto {
                meal,
                protein_key,
                polarity,
            }),
    };

    Ok((StatusCode::OK, Json(response)))
}
