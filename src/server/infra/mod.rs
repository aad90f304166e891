//! Infrastructure port and its backends.
//!
//! `Infrastructure` is the capability contract the lifecycle service drives. A backend
//! is bound to the connection of the current unit of work, so every write it performs
//! commits or rolls back together with the rest of the request. Selecting a backend is
//! a process-level decision made once from configuration (`InfraBackend`).

pub mod simulated;

use std::{fmt, str::FromStr};

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::server::{
    error::{config::ConfigError, infra::InfraError},
    infra::simulated::SimulatedInfrastructure,
    model::{
        flavor::Flavor,
        image::Image,
        pagination::Pagination,
        server::{CreateServerParams, Server, ServerAction, UpdateServerParams},
    },
};

/// Operations a compute backend must provide.
///
/// None of the methods have default bodies: a backend that does not implement every
/// operation does not compile.
#[async_trait]
pub trait Infrastructure: Send + Sync {
    /// Provisions a server in the `ACTIVE` status and assigns it an address.
    ///
    /// Callers are responsible for checking that the referenced flavor and image exist.
    async fn create_server(&self, params: CreateServerParams) -> Result<Server, InfraError>;

    async fn get_server(&self, id: &str) -> Result<Option<Server>, InfraError>;

    async fn list_servers(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Server>, u64), InfraError>;

    async fn update_server(
        &self,
        id: &str,
        params: UpdateServerParams,
    ) -> Result<Server, InfraError>;

    async fn delete_server(&self, id: &str) -> Result<(), InfraError>;

    /// Applies a lifecycle action and returns the server in its new state.
    ///
    /// Fails with `TransitionRejected` when the backend observes a status from which the
    /// action is not permitted, e.g. because a concurrent request already moved it.
    async fn perform_action(
        &self,
        id: &str,
        action: ServerAction,
        flavor_id: Option<&str>,
    ) -> Result<Server, InfraError>;

    async fn get_flavor(&self, id: &str) -> Result<Option<Flavor>, InfraError>;

    async fn list_flavors(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Flavor>, u64), InfraError>;

    async fn get_image(&self, id: &str) -> Result<Option<Image>, InfraError>;

    async fn list_images(&self, pagination: Pagination)
        -> Result<(Vec<Image>, u64), InfraError>;

    /// Trivial read used by the health probe.
    async fn probe(&self) -> Result<(), InfraError>;
}

/// Backend selected through `INFRA_BACKEND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InfraBackend {
    /// Reads and writes the relational store directly.
    #[default]
    Simulated,
}

impl InfraBackend {
    /// Binds the backend to a unit of work's connection.
    pub fn connect<'a, C>(&self, conn: &'a C) -> Box<dyn Infrastructure + 'a>
    where
        C: ConnectionTrait + Send + Sync + 'a,
    {
        match self {
            InfraBackend::Simulated => Box::new(SimulatedInfrastructure::new(conn)),
        }
    }
}

impl fmt::Display for InfraBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfraBackend::Simulated => f.write_str("simulated"),
        }
    }
}

impl FromStr for InfraBackend {
    type Err = ConfigError;

    /// Parses a backend name.
    ///
    /// `openstack` is a recognised backend with no client in this build and is reported
    /// as `UnsupportedBackend`; anything else is an invalid value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simulated" => Ok(InfraBackend::Simulated),
            "openstack" => Err(ConfigError::UnsupportedBackend(s.to_string())),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "INFRA_BACKEND".to_string(),
                value: s.to_string(),
                reason: "expected 'simulated' or 'openstack'".to_string(),
            }),
        }
    }
}
