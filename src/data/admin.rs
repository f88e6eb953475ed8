use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an admin account by username.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Admin found
    /// - `Ok(None)`: No admin with this username
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
