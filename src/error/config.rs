use thiserror::Error;

/// Configuration problems detected at startup.
///
/// These always prevent the application from running; they are never
/// surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),

    /// `RESTAURANT_TIMEZONE` is not a recognized IANA timezone name.
    #[error("Invalid timezone name '{0}'")]
    InvalidTimezone(String),
}
