use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::data::menu_day::MenuDayRepository;

mod find_in_range;
mod upsert;
