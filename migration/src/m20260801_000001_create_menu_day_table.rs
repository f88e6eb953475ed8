use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuDay::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuDay::Id))
                    .col(date(MenuDay::Date).unique_key())
                    .col(text_null(MenuDay::Breakfast))
                    .col(text_null(MenuDay::Lunch))
                    .col(text_null(MenuDay::Dinner))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuDay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuDay {
    Table,
    Id,
    Date,
    Breakfast,
    Lunch,
    Dinner,
}
