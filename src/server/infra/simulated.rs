//! Backend that simulates a compute control plane on top of the relational store.
//!
//! Every operation completes synchronously: a created server is immediately `ACTIVE`
//! and actions move it straight to their target status. State transitions are applied
//! with a compare-and-set update so a racing request that already moved the server
//! causes this one to be rejected rather than silently overwritten.

use std::net::Ipv4Addr;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{flavor::FlavorRepository, image::ImageRepository, server::ServerRepository},
    error::infra::InfraError,
    infra::Infrastructure,
    model::{
        flavor::Flavor,
        image::Image,
        pagination::Pagination,
        server::{
            CreateServerParams, NewServer, Server, ServerAction, ServerStatus,
            UpdateServerParams,
        },
    },
};

pub struct SimulatedInfrastructure<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SimulatedInfrastructure<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Applies `action` to a server last observed in `expected`.
    ///
    /// The write only lands while the stored status is still `expected`. Within one
    /// SQLite connection units of work serialize, so a mismatch only arises on stores
    /// that let concurrent writers reach the same row.
    ///
    /// # Returns
    /// - `Ok(Server)` - The server after the transition
    /// - `Err(InfraError::TransitionRejected)` - `action` is illegal from `expected`, or
    ///   the stored status moved on; `current` carries the status actually stored
    /// - `Err(InfraError::ServerNotFound)` - The server no longer exists
    async fn apply_transition(
        &self,
        id: &str,
        expected: ServerStatus,
        action: ServerAction,
        flavor_id: Option<&str>,
    ) -> Result<Server, InfraError> {
        let Some(next) = expected.transition(action) else {
            return Err(InfraError::TransitionRejected {
                current: expected,
                action,
            });
        };

        let flavor_id = match action {
            ServerAction::Resize => flavor_id,
            _ => None,
        };

        let repo = ServerRepository::new(self.db);
        let applied = repo
            .transition(id, expected, next, flavor_id, Utc::now())
            .await?;

        let server = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| InfraError::ServerNotFound(id.to_string()))?;

        if !applied {
            return Err(InfraError::TransitionRejected {
                current: server.status,
                action,
            });
        }

        Ok(server)
    }
}

/// Picks a random address in `10.0.0.1` through `10.255.255.255`.
fn random_private_ip() -> Ipv4Addr {
    let mut rng = rand::rng();
    let low = rng.random_range(1..=0x00FF_FFFF_u32);

    Ipv4Addr::from(0x0A00_0000 | low)
}

#[async_trait]
impl<'a, C> Infrastructure for SimulatedInfrastructure<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_server(&self, params: CreateServerParams) -> Result<Server, InfraError> {
        let server = NewServer {
            id: uuid::Uuid::new_v4().to_string(),
            name: params.name,
            status: ServerStatus::Active,
            flavor_id: params.flavor_id,
            image_id: params.image_id,
            ip_address: random_private_ip().to_string(),
            created_at: Utc::now(),
        };

        Ok(ServerRepository::new(self.db).create(server).await?)
    }

    async fn get_server(&self, id: &str) -> Result<Option<Server>, InfraError> {
        Ok(ServerRepository::new(self.db).get_by_id(id).await?)
    }

    async fn list_servers(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Server>, u64), InfraError> {
        Ok(ServerRepository::new(self.db)
            .get_paginated(pagination)
            .await?)
    }

    async fn update_server(
        &self,
        id: &str,
        params: UpdateServerParams,
    ) -> Result<Server, InfraError> {
        ServerRepository::new(self.db)
            .update_metadata(id, params.name, Utc::now())
            .await?
            .ok_or_else(|| InfraError::ServerNotFound(id.to_string()))
    }

    async fn delete_server(&self, id: &str) -> Result<(), InfraError> {
        if ServerRepository::new(self.db).delete(id).await? {
            Ok(())
        } else {
            Err(InfraError::ServerNotFound(id.to_string()))
        }
    }

    async fn perform_action(
        &self,
        id: &str,
        action: ServerAction,
        flavor_id: Option<&str>,
    ) -> Result<Server, InfraError> {
        let current = ServerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| InfraError::ServerNotFound(id.to_string()))?;

        self.apply_transition(id, current.status, action, flavor_id)
            .await
    }

    async fn get_flavor(&self, id: &str) -> Result<Option<Flavor>, InfraError> {
        Ok(FlavorRepository::new(self.db).get_by_id(id).await?)
    }

    async fn list_flavors(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Flavor>, u64), InfraError> {
        Ok(FlavorRepository::new(self.db)
            .get_paginated(pagination)
            .await?)
    }

    async fn get_image(&self, id: &str) -> Result<Option<Image>, InfraError> {
        Ok(ImageRepository::new(self.db).get_by_id(id).await?)
    }

    async fn list_images(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Image>, u64), InfraError> {
        Ok(ImageRepository::new(self.db).get_paginated(pagination).await?)
    }

    async fn probe(&self) -> Result<(), InfraError> {
        Ok(ServerRepository::new(self.db).ping().await?)
    }
}
