//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. All fields are cheap to clone:
//! `DatabaseConnection` is a pool handle and the rest are small values.

use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::server::infra::InfraBackend;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers open one `UnitOfWork` per request on it.
    pub db: DatabaseConnection,

    /// Infrastructure backend bound to each request's transaction.
    pub infra: InfraBackend,

    pub app_name: String,
    pub app_version: String,
    pub app_env: String,

    /// Process start, reported as uptime by the health probe.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        infra: InfraBackend,
        app_name: String,
        app_version: String,
        app_env: String,
    ) -> Self {
        Self {
            db,
            infra,
            app_name,
            app_version,
            app_env,
            started_at: Instant::now(),
        }
    }
}
