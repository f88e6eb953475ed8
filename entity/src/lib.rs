//! SeaORM entity definitions for the mealboard database schema.

pub mod admin;
pub mod comment;
pub mod menu_day;
pub mod protein_vote;

pub mod prelude {
    pub use super::admin::Entity as Admin;
    pub use super::comment::Entity as Comment;
    pub use super::menu_day::Entity as MenuDay;
    pub use super::protein_vote::Entity as ProteinVote;
}
