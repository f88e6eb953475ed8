use sea_orm::entity::prelude::*;

/// One active like/dislike vote on a protein slot.
///
/// At most one row exists per (date, meal, voter_id) triple. The toggle
/// transaction in the data layer enforces the invariant; a unique index on
/// the triple backstops it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "protein_vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    /// Stored meal name: "lunch" or "dinner".
    pub meal: String,
    /// Stored slot name: "protein_1", "protein_2" or "vegetarian".
    pub protein_key: String,
    /// Opaque per-browser token used only to deduplicate votes.
    pub voter_id: String,
    /// Stored vote polarity: "like" or "dislike".
    pub polarity: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
