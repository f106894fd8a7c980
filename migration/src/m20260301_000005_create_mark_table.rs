use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_student_table::Student,
    m20260301_000004_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mark::Table)
                    .if_not_exists()
                    .col(pk_auto(Mark::Id))
                    .col(integer(Mark::StudentId))
                    .col(integer(Mark::SubjectId))
                    .col(integer(Mark::Marks))
                    .col(
                        timestamp(Mark::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Mark::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mark_student_id")
                            .from(Mark::Table, Mark::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mark_subject_id")
                            .from(Mark::Table, Mark::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One mark per student and subject; the upsert conflicts on this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_mark_student_subject")
                    .table(Mark::Table)
                    .col(Mark::StudentId)
                    .col(Mark::SubjectId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mark {
    Table,
    Id,
    StudentId,
    SubjectId,
    Marks,
    CreatedAt,
    UpdatedAt,
}
