use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{config::ConfigError, AppError};

/// Timezone used when `RESTAURANT_TIMEZONE` is not set.
///
/// "Today" for the vote date gate is always computed in this civil timezone,
/// never from ambient server-local time, so the day rolls over at the
/// restaurant's midnight regardless of where the server runs.
const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub timezone: Tz,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let timezone_name =
            std::env::var("RESTAURANT_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            timezone: Tz::from_str(&timezone_name)
                .map_err(|_| ConfigError::InvalidTimezone(timezone_name))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
