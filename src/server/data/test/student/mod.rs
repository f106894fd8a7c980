use crate::server::{data::student::StudentRepository, model::student::UpdateStudentParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all_with_marks;
mod get_by_id_with_marks;
mod update;
