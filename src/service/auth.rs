//! Admin authentication: credential verification and token issuance.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::DatabaseConnection;

use crate::{
    data::admin::AdminRepository,
    error::{auth::AuthError, AppError},
    model::admin::Claims,
};

const TOKEN_TTL_HOURS: i64 = 8;

/// Service verifying admin credentials and issuing bearer tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str) -> Self {
        Self { db, jwt_secret }
    }

    /// Verifies a username/password pair and issues a signed bearer token.
    ///
    /// Unknown usernames and wrong passwords both produce the same
    /// credential error.
    ///
    /// # Returns
    /// - `Ok(token)` - HS256-signed token valid for eight hours
    /// - `Err(AppError::AuthErr)` - Credentials rejected
    /// - `Err(AppError)` - Database or signing error
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let Some(admin) = AdminRepository::new(self.db).find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &admin.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let expiry = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
        let claims = Claims {
            sub: admin.username.clone(),
            exp: expiry.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(AuthError::from)?;

        tracing::info!(username = %admin.username, "Admin logged in");

        Ok(token)
    }
}

/// Checks a plaintext password against a stored Argon2 hash. Malformed
/// stored hashes verify as false rather than erroring.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash is not a valid Argon2 hash");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
