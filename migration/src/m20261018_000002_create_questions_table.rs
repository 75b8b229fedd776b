use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(pk_auto(Questions::Id))
                    .col(string(Questions::Name))
                    .col(string(Questions::Pattern))
                    // Plain string rather than an enum type so unknown values persist
                    .col(string(Questions::Difficulty))
                    .col(timestamp_with_time_zone(Questions::LastCompletedTime))
                    .col(timestamp_with_time_zone(Questions::NextDueTime))
                    .col(text(Questions::Notes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Questions {
    Table,
    Id,
    Name,
    Pattern,
    Difficulty,
    LastCompletedTime,
    NextDueTime,
    Notes,
}
