//! Admin login DTOs and bearer-token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims carried by an admin bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin username.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub message: String,
    pub token: String,
}
