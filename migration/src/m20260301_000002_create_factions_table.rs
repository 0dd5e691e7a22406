use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No default for members: every insert writes the {count, userId} roster
        manager
            .create_table(
                Table::create()
                    .table(Factions::Table)
                    .if_not_exists()
                    .col(pk_auto(Factions::Id))
                    .col(string_uniq(Factions::Name))
                    .col(integer(Factions::Economy).default(100))
                    .col(integer(Factions::Money).default(1000))
                    .col(string_null(Factions::Leader))
                    .col(json(Factions::Members))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Factions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Factions {
    Table,
    Id,
    Name,
    Economy,
    Money,
    Leader,
    Members,
}
