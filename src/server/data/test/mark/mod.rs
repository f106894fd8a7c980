use crate::server::{
    data::mark::MarkRepository,
    model::mark::{UpsertMarkOutcome, UpsertMarkParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
