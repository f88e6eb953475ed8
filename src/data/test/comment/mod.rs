use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::comment::CommentFactory};

use crate::data::comment::CommentRepository;

mod create;
mod delete;
mod visibility;
