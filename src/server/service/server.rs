//! Server lifecycle service.
//!
//! Every mutating operation validates in the same order and stops at the first
//! failure:
//!
//! 1. the server exists
//! 2. referenced catalog entries (flavor, image) exist
//! 3. the requested action is legal from the server's current status
//!
//! Only then is the work delegated to the infrastructure backend.

use crate::server::{
    error::{lifecycle::LifecycleError, AppError},
    infra::Infrastructure,
    middleware::request_context::RequestContext,
    model::{
        pagination::{Page, Pagination},
        server::{CreateServerParams, Server, ServerActionParams, UpdateServerParams},
    },
};

pub struct ServerService<'a> {
    infra: &'a dyn Infrastructure,
    ctx: &'a RequestContext,
}

impl<'a> ServerService<'a> {
    pub fn new(infra: &'a dyn Infrastructure, ctx: &'a RequestContext) -> Self {
        Self { infra, ctx }
    }

    /// Creates a server in the `ACTIVE` status
    ///
    /// # Returns
    /// - `Ok(Server)` - The provisioned server
    /// - `Err(AppError::LifecycleErr)` - Flavor or image does not exist (checked in that order)
    pub async fn create(&self, params: CreateServerParams) -> Result<Server, AppError> {
        self.require_flavor(&params.flavor_id).await?;

        if self.infra.get_image(&params.image_id).await?.is_none() {
            return Err(LifecycleError::ImageNotFound(params.image_id).into());
        }

        let server = self.infra.create_server(params).await?;

        tracing::info!(
            request_id = %self.ctx.request_id,
            server_id = %server.id,
            flavor_id = %server.flavor_id,
            image_id = %server.image_id,
            ip_address = %server.ip_address,
            "Created server"
        );

        Ok(server)
    }

    pub async fn get(&self, id: &str) -> Result<Server, AppError> {
        tracing::debug!(request_id = %self.ctx.request_id, server_id = %id, "Fetching server");

        self.require_server(id).await
    }

    /// Gets a page of servers ordered by creation time
    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Page<Server>, AppError> {
        tracing::debug!(
            request_id = %self.ctx.request_id,
            limit = pagination.limit,
            offset = pagination.offset,
            "Listing servers"
        );

        let (servers, total) = self.infra.list_servers(pagination).await?;

        Ok(Page::new(servers, total, pagination))
    }

    /// Updates server metadata; `updated_at` is bumped even when no field changes
    pub async fn update(&self, id: &str, params: UpdateServerParams) -> Result<Server, AppError> {
        self.require_server(id).await?;

        let server = self.infra.update_server(id, params).await?;

        tracing::info!(
            request_id = %self.ctx.request_id,
            server_id = %server.id,
            name = %server.name,
            "Updated server"
        );

        Ok(server)
    }

    /// Applies a lifecycle action
    ///
    /// # Returns
    /// - `Ok(Server)` - The server in its new status
    /// - `Err(AppError::LifecycleErr)` - `ServerNotFound`, then `FlavorNotFound` for a
    ///   resize target, then `InvalidStateTransition`
    pub async fn perform_action(
        &self,
        id: &str,
        params: ServerActionParams,
    ) -> Result<Server, AppError> {
        let server = self.require_server(id).await?;

        if let Some(flavor_id) = &params.flavor_id {
            self.require_flavor(flavor_id).await?;
        }

        if server.status.transition(params.action).is_none() {
            tracing::warn!(
                request_id = %self.ctx.request_id,
                server_id = %id,
                status = %server.status,
                action = %params.action,
                "Rejected lifecycle action"
            );

            return Err(LifecycleError::InvalidStateTransition {
                current: server.status,
                action: params.action,
            }
            .into());
        }

        let updated = self
            .infra
            .perform_action(id, params.action, params.flavor_id.as_deref())
            .await
            .inspect_err(|err| {
                tracing::warn!(
                    request_id = %self.ctx.request_id,
                    server_id = %id,
                    action = %params.action,
                    "Backend rejected lifecycle action: {}",
                    err
                );
            })?;

        tracing::info!(
            request_id = %self.ctx.request_id,
            server_id = %id,
            action = %params.action,
            from = %server.status,
            to = %updated.status,
            flavor_id = %updated.flavor_id,
            "Performed lifecycle action"
        );

        Ok(updated)
    }

    /// Deletes a server regardless of its status
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.require_server(id).await?;

        self.infra.delete_server(id).await?;

        tracing::info!(request_id = %self.ctx.request_id, server_id = %id, "Deleted server");

        Ok(())
    }

    async fn require_server(&self, id: &str) -> Result<Server, AppError> {
        self.infra
            .get_server(id)
            .await?
            .ok_or_else(|| LifecycleError::ServerNotFound(id.to_string()).into())
    }

    async fn require_flavor(&self, id: &str) -> Result<(), AppError> {
        match self.infra.get_flavor(id).await? {
            Some(_) => Ok(()),
            None => Err(LifecycleError::FlavorNotFound(id.to_string()).into()),
        }
    }
}
