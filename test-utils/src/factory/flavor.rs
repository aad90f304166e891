//! Flavor factory for creating test hardware profiles.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flavors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flavor::FlavorFactory;
///
/// let flavor = FlavorFactory::new(&db)
///     .name("m1.huge")
///     .vcpus(16)
///     .build()
///     .await?;
/// ```
pub struct FlavorFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    vcpus: i32,
    ram_mb: i32,
    disk_gb: i32,
}

impl<'a> FlavorFactory<'a> {
    /// Creates a new FlavorFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - name: `"flavor-{n}"` where n is auto-incremented
    /// - vcpus: `1`, ram_mb: `2048`, disk_gb: `20`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("flavor-{}", next_id()),
            vcpus: 1,
            ram_mb: 2048,
            disk_gb: 20,
        }
    }

    /// Sets the flavor ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the flavor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the virtual CPU count.
    pub fn vcpus(mut self, vcpus: i32) -> Self {
        self.vcpus = vcpus;
        self
    }

    /// Builds and inserts the flavor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flavor::Model)` - Created flavor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flavor::Model, DbErr> {
        entity::flavor::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            vcpus: ActiveValue::Set(self.vcpus),
            ram_mb: ActiveValue::Set(self.ram_mb),
            disk_gb: ActiveValue::Set(self.disk_gb),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flavor with default values.
///
/// Shorthand for `FlavorFactory::new(db).build().await`.
pub async fn create_flavor(db: &DatabaseConnection) -> Result<entity::flavor::Model, DbErr> {
    FlavorFactory::new(db).build().await
}
