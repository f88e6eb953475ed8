//! Request body extraction with application-level rejections.

use axum::extract::{rejection::JsonRejection, FromRequest, Request};

use crate::error::AppError;

/// JSON body extractor reporting malformed payloads as 400 Bad Request.
///
/// axum's stock `Json` extractor answers a body that parses as JSON but does
/// not match the target type (an unknown meal name, a missing field) with
/// 422, while this API promises 400 for every malformed body. The wrapper
/// routes the rejection through `AppError::BadRequest`, keeping the
/// rejection's own description as the error message.
#[derive(Debug)]
pub struct BodyJson<T>(pub T);

impl<S, T> FromRequest<S> for BodyJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
