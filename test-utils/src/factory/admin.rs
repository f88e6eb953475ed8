//! Admin factory for creating test admin accounts.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test admin accounts.
///
/// The default password hash is deliberately not a valid Argon2 string; tests
/// exercising login must hash a known password themselves and pass it through
/// `password_hash()`.
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - username: `"admin_{id}"` where id is auto-incremented
    /// - password_hash: a placeholder that fails verification
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("admin_{id}"),
            password_hash: "not-a-valid-hash".to_string(),
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Inserts the admin account into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created admin entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
