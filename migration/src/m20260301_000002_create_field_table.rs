use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Field::Table)
                    .if_not_exists()
                    .col(pk_auto(Field::Id))
                    .col(string(Field::Name))
                    .col(
                        timestamp(Field::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Field::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Field::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Field {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
