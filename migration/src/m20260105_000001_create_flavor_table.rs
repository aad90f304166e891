use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flavor::Table)
                    .if_not_exists()
                    .col(string(Flavor::Id).primary_key())
                    .col(string_uniq(Flavor::Name))
                    .col(integer(Flavor::Vcpus))
                    .col(integer(Flavor::RamMb))
                    .col(integer(Flavor::DiskGb))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flavor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flavor {
    Table,
    Id,
    Name,
    Vcpus,
    RamMb,
    DiskGb,
}
