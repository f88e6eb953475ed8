use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::admin::AdminFactory};

use crate::data::admin::AdminRepository;

mod find_by_username;
