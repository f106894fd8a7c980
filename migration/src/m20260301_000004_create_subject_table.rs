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
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string(Subject::Name))
                    .col(integer(Subject::FieldId))
                    .col(
                        timestamp(Subject::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Subject::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_field_id")
                            .from(Subject::Table, Subject::FieldId)
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
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    Table,
    Id,
    Name,
    FieldId,
    CreatedAt,
    UpdatedAt,
}
