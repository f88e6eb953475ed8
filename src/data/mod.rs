//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each table. Repositories work with SeaORM entity models; conversion to
//! domain models happens in the service layer.

pub mod admin;
pub mod comment;
pub mod menu_day;
pub mod protein_vote;

#[cfg(test)]
mod test;
