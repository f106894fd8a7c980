use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_field_table::Field;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::Username))
                    .col(string(Student::Password))
                    .col(integer(Student::EnrollmentYear))
                    .col(integer(Student::FieldId))
                    .col(
                        timestamp(Student::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Student::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_field_id")
                            .from(Student::Table, Student::FieldId)
                            .to(Field::Table, Field::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    Username,
    Password,
    EnrollmentYear,
    FieldId,
    CreatedAt,
    UpdatedAt,
}
