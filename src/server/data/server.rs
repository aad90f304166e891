use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::Pagination,
    server::{NewServer, Server, ServerStatus},
};

pub struct ServerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fully resolved server row
    pub async fn create(&self, server: NewServer) -> Result<Server, DbErr> {
        let model = entity::server::ActiveModel {
            id: ActiveValue::Set(server.id),
            name: ActiveValue::Set(server.name),
            status: ActiveValue::Set(server.status.to_string()),
            flavor_id: ActiveValue::Set(server.flavor_id),
            image_id: ActiveValue::Set(server.image_id),
            ip_address: ActiveValue::Set(server.ip_address),
            created_at: ActiveValue::Set(server.created_at),
            updated_at: ActiveValue::Set(server.created_at),
        }
        .insert(self.db)
        .await?;

        Server::from_entity(model)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Server>, DbErr> {
        entity::prelude::Server::find_by_id(id)
            .one(self.db)
            .await?
            .map(Server::from_entity)
            .transpose()
    }

    /// Gets a page of servers ordered by creation time, ties broken by ID
    ///
    /// # Returns
    /// - `Ok((servers, total))` - The requested window and the count of all servers
    /// - `Err(DbErr)` - Database error or a row with an unknown status
    pub async fn get_paginated(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Server>, u64), DbErr> {
        let total = entity::prelude::Server::find().count(self.db).await?;

        let servers = entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::CreatedAt)
            .order_by_asc(entity::server::Column::Id)
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Server::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((servers, total))
    }

    /// Updates mutable metadata and bumps `updated_at`
    ///
    /// Fields passed as `None` are left unchanged; `updated_at` is always bumped.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - The updated server
    /// - `Ok(None)` - No server with this ID
    pub async fn update_metadata(
        &self,
        id: &str,
        name: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Option<Server>, DbErr> {
        let Some(model) = entity::prelude::Server::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        active_model.updated_at = ActiveValue::Set(now);

        let model = active_model.update(self.db).await?;

        Server::from_entity(model).map(Some)
    }

    /// Moves a server from `from` to `to`, optionally replacing its flavor
    ///
    /// The update only matches while the stored status still equals `from`, so of two
    /// racing transitions at most one applies.
    ///
    /// # Returns
    /// - `Ok(true)` - The transition was applied
    /// - `Ok(false)` - The server is gone or no longer in `from`
    pub async fn transition(
        &self,
        id: &str,
        from: ServerStatus,
        to: ServerStatus,
        flavor_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Server::update_many()
            .col_expr(entity::server::Column::Status, Expr::value(to.as_str()))
            .col_expr(entity::server::Column::UpdatedAt, Expr::value(now));

        if let Some(flavor_id) = flavor_id {
            update = update.col_expr(entity::server::Column::FlavorId, Expr::value(flavor_id));
        }

        let result = update
            .filter(entity::server::Column::Id.eq(id))
            .filter(entity::server::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a server
    ///
    /// # Returns
    /// - `Ok(true)` - The row was removed
    /// - `Ok(false)` - No server with this ID
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Cheapest possible read against the store, used by the health probe
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.execute_unprepared("SELECT 1").await?;

        Ok(())
    }
}
