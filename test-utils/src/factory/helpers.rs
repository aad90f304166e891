//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with the flavor and image it references.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((flavor, image, server))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::flavor::Model,
        entity::image::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let flavor = crate::factory::flavor::create_flavor(db).await?;
    let image = crate::factory::image::create_image(db).await?;
    let server = crate::factory::server::create_server(db, &flavor.id, &image.id).await?;

    Ok((flavor, image, server))
}
