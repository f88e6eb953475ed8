use sea_orm::entity::prelude::*;

/// One published day of menus, keyed by calendar date.
///
/// The three meal columns hold JSON-encoded objects mapping field names
/// (e.g. "protein_1", "salad") to free-text descriptions. `None` means the
/// meal was never published for that date.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_day")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub breakfast: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lunch: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dinner: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
