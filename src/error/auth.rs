use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication failures on the admin surface.
///
/// All variants map to 401 Unauthorized; the message distinguishes a missing
/// credential from a rejected one for the client's benefit.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected route.
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// The supplied token failed signature or expiry validation.
    #[error("Invalid or expired token.")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Login attempt with an unknown username or wrong password.
    ///
    /// Deliberately does not reveal which of the two was wrong.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("Auth failure: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
