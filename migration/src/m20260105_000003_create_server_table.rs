use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_flavor_table::Flavor, m20260105_000002_create_image_table::Image,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(string(Server::Id).primary_key())
                    .col(string(Server::Name))
                    .col(string(Server::Status))
                    .col(string(Server::FlavorId))
                    .col(string(Server::ImageId))
                    .col(string(Server::IpAddress))
                    .col(
                        timestamp_with_time_zone(Server::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Server::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_flavor_id")
                            .from(Server::Table, Server::FlavorId)
                            .to(Flavor::Table, Flavor::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_image_id")
                            .from(Server::Table, Server::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the stable list order (created_at, id)
        manager
            .create_index(
                Index::create()
                    .name("idx_server_created_at_id")
                    .table(Server::Table)
                    .col(Server::CreatedAt)
                    .col(Server::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Name,
    Status,
    FlavorId,
    ImageId,
    IpAddress,
    CreatedAt,
    UpdatedAt,
}
