//! Image factory for creating test OS images.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test images with customizable fields.
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    os_distro: String,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - name: `"image-{n}"` where n is auto-incremented
    /// - os_distro: `"ubuntu"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("image-{}", next_id()),
            os_distro: "ubuntu".to_string(),
        }
    }

    /// Sets the image ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the image name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the distribution label.
    pub fn os_distro(mut self, os_distro: impl Into<String>) -> Self {
        self.os_distro = os_distro.into();
        self
    }

    /// Builds and inserts the image entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::image::Model)` - Created image entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        entity::image::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            os_distro: ActiveValue::Set(self.os_distro),
            min_disk_gb: ActiveValue::Set(8),
            size_bytes: ActiveValue::Set(1_073_741_824),
            status: ActiveValue::Set("active".to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db).build().await
}
