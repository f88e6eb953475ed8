//! Bearer-token guard for the admin surface.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::{
    error::{auth::AuthError, AppError},
    model::admin::Claims,
};

/// Validates admin bearer tokens on protected routes.
pub struct AuthGuard<'a> {
    jwt_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(jwt_secret: &'a str) -> Self {
        Self { jwt_secret }
    }

    /// Extracts and validates the bearer token from request headers.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is present, well signed and unexpired
    /// - `Err(AppError::AuthErr)` - Token missing, malformed or expired
    pub fn require(&self, headers: &HeaderMap) -> Result<Claims, AppError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::from)?;

        Ok(data.claims)
    }
}
