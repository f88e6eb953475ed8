use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::extract::BodyJson,
    error::AppError,
    model::{
        admin::{LoginDto, TokenDto},
        api::ErrorDto,
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Authenticate an admin and issue a bearer token.
///
/// Unknown usernames and wrong passwords produce the same error, without
/// revealing which was wrong.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Login credentials (username and password)
///
/// # Returns
/// - `200 OK` - Signed bearer token valid for eight hours
/// - `400 Bad Request` - Malformed request body
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = TokenDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    BodyJson(payload): BodyJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state.db, &state.jwt_secret)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            message: "Login successful.".to_string(),
            token,
        }),
    ))
}
