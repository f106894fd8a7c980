use crate::server::{data::field::FieldRepository, model::field::CreateFieldParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
