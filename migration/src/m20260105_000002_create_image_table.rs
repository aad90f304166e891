use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(string(Image::Id).primary_key())
                    .col(string_uniq(Image::Name))
                    .col(string(Image::OsDistro))
                    .col(integer(Image::MinDiskGb).default(0))
                    .col(big_integer(Image::SizeBytes).default(0))
                    .col(string(Image::Status).default("active"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    Table,
    Id,
    Name,
    OsDistro,
    MinDiskGb,
    SizeBytes,
    Status,
}
