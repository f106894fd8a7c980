pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_field_table;
mod m20260301_000003_create_student_table;
mod m20260301_000004_create_subject_table;
mod m20260301_000005_create_mark_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_field_table::Migration),
            Box::new(m20260301_000003_create_student_table::Migration),
            Box::new(m20260301_000004_create_subject_table::Migration),
            Box::new(m20260301_000005_create_mark_table::Migration),
        ]
    }
}
