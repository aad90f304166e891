//! Server factory for creating test server rows.
//!
//! Inserts rows directly, bypassing the lifecycle service, so tests can place a server
//! in any status (including the system-managed ones the service never produces).

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, &flavor.id, &image.id)
///     .status("VERIFY_RESIZE")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    status: String,
    flavor_id: String,
    image_id: String,
    ip_address: String,
    created_at: DateTime<Utc>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - name: `"server-{n}"` where n is auto-incremented
    /// - status: `"ACTIVE"`
    /// - ip_address: `"10.0.{n}.{n}"` derived from the counter
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `flavor_id` - ID of an existing flavor
    /// - `image_id` - ID of an existing image
    pub fn new(
        db: &'a DatabaseConnection,
        flavor_id: impl Into<String>,
        image_id: impl Into<String>,
    ) -> Self {
        let n = next_id();
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("server-{}", n),
            status: "ACTIVE".to_string(),
            flavor_id: flavor_id.into(),
            image_id: image_id.into(),
            ip_address: format!("10.0.{}.{}", (n / 250) % 250, n % 250 + 1),
            created_at: Utc::now(),
        }
    }

    /// Sets the server ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the raw stored status, e.g. `"SHUTOFF"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp (also used as the initial `updated_at`).
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown flavor or image)
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            status: ActiveValue::Set(self.status),
            flavor_id: ActiveValue::Set(self.flavor_id),
            image_id: ActiveValue::Set(self.image_id),
            ip_address: ActiveValue::Set(self.ip_address),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `ACTIVE` server with default values for the given flavor and image.
pub async fn create_server(
    db: &DatabaseConnection,
    flavor_id: &str,
    image_id: &str,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, flavor_id, image_id).build().await
}
