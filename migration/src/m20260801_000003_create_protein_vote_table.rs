use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProteinVote::Table)
                    .if_not_exists()
                    .col(pk_auto(ProteinVote::Id))
                    .col(date(ProteinVote::Date))
                    .col(string(ProteinVote::Meal))
                    .col(string(ProteinVote::ProteinKey))
                    .col(string(ProteinVote::VoterId))
                    .col(string(ProteinVote::Polarity))
                    .to_owned(),
            )
            .await?;

        // Covers the toggle lookup (date, meal, voter) and the per-day
        // aggregation scan (date prefix). Unique, so a duplicate row slipping
        // past the toggle transaction fails loudly instead of corrupting the
        // single-vote invariant.
        manager
            .create_index(
                Index::create()
                    .name("idx_protein_vote_date_meal_voter")
                    .table(ProteinVote::Table)
                    .col(ProteinVote::Date)
                    .col(ProteinVote::Meal)
                    .col(ProteinVote::VoterId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProteinVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProteinVote {
    Table,
    Id,
    Date,
    Meal,
    ProteinKey,
    VoterId,
    Polarity,
}
