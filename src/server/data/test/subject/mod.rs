use crate::server::{
    data::subject::SubjectRepository,
    model::subject::{CreateSubjectParam, GetSubjectsParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
