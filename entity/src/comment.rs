use sea_orm::entity::prelude::*;

/// Public comment attached to a menu day.
///
/// Comments reference their day by date value rather than by foreign key so a
/// comment can be posted before the menu itself is published. Hidden comments
/// (`visible = false`) stay in the table for admin review until permanently
/// deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeUtc,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
