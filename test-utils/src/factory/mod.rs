//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database; servers need an
//! existing flavor and image, which `helpers::create_server_with_dependencies` creates.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let flavor = factory::create_flavor(&db).await?;
//!     let image = factory::create_image(&db).await?;
//!
//!     // Create with all dependencies
//!     let (flavor, image, server) =
//!         factory::helpers::create_server_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db, &flavor.id, &image.id)
//!     .name("web-01")
//!     .status("SHUTOFF")
//!     .build()
//!     .await?;
//! ```

pub mod flavor;
pub mod helpers;
pub mod image;
pub mod server;

pub use flavor::create_flavor;
pub use image::create_image;
pub use server::create_server;
