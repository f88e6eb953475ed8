use sea_orm::entity::prelude::*;

/// Admin account used to protect menu publication and comment moderation.
///
/// `password_hash` holds an Argon2 PHC string. Rows are seeded out-of-band;
/// nothing in the application mutates this table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
