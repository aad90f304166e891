//! Well-known catalog rows and their idempotent seeding.
//!
//! Flavor and image IDs are fixed so that clients and tests can reference them across
//! restarts. Seeding inserts a row only when its ID is absent and never overwrites an
//! existing row.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct SeedFlavor {
    pub id: &'static str,
    pub name: &'static str,
    pub vcpus: i32,
    pub ram_mb: i32,
    pub disk_gb: i32,
}

pub struct SeedImage {
    pub id: &'static str,
    pub name: &'static str,
    pub os_distro: &'static str,
    pub min_disk_gb: i32,
    pub size_bytes: i64,
}

pub const SEED_FLAVORS: [SeedFlavor; 5] = [
    SeedFlavor {
        id: "11111111-0000-0000-0000-000000000001",
        name: "m1.tiny",
        vcpus: 1,
        ram_mb: 512,
        disk_gb: 1,
    },
    SeedFlavor {
        id: "11111111-0000-0000-0000-000000000002",
        name: "m1.small",
        vcpus: 1,
        ram_mb: 2048,
        disk_gb: 20,
    },
    SeedFlavor {
        id: "11111111-0000-0000-0000-000000000003",
        name: "m1.medium",
        vcpus: 2,
        ram_mb: 4096,
        disk_gb: 40,
    },
    SeedFlavor {
        id: "11111111-0000-0000-0000-000000000004",
        name: "m1.large",
        vcpus: 4,
        ram_mb: 8192,
        disk_gb: 80,
    },
    SeedFlavor {
        id: "11111111-0000-0000-0000-000000000005",
        name: "m1.xlarge",
        vcpus: 8,
        ram_mb: 16384,
        disk_gb: 160,
    },
];

pub const SEED_IMAGES: [SeedImage; 4] = [
    SeedImage {
        id: "22222222-0000-0000-0000-000000000001",
        name: "Ubuntu 22.04 LTS",
        os_distro: "ubuntu",
        min_disk_gb: 8,
        size_bytes: 2_361_393_152,
    },
    SeedImage {
        id: "22222222-0000-0000-0000-000000000002",
        name: "Debian 12",
        os_distro: "debian",
        min_disk_gb: 8,
        size_bytes: 1_073_741_824,
    },
    SeedImage {
        id: "22222222-0000-0000-0000-000000000003",
        name: "CentOS Stream 9",
        os_distro: "centos",
        min_disk_gb: 10,
        size_bytes: 1_610_612_736,
    },
    SeedImage {
        id: "22222222-0000-0000-0000-000000000004",
        name: "Fedora 39",
        os_distro: "fedora",
        min_disk_gb: 8,
        size_bytes: 1_879_048_192,
    },
];

const SEED_IMAGE_STATUS: &str = "active";

/// Number of catalog rows a seeding run actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSeedReport {
    pub flavors_inserted: u64,
    pub images_inserted: u64,
}

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every well-known flavor and image whose ID is not yet present
    pub async fn seed(&self) -> Result<CatalogSeedReport, DbErr> {
        let mut report = CatalogSeedReport::default();

        for flavor in &SEED_FLAVORS {
            let exists = entity::prelude::Flavor::find_by_id(flavor.id)
                .one(self.db)
                .await?
                .is_some();
            if exists {
                continue;
            }

            entity::flavor::ActiveModel {
                id: ActiveValue::Set(flavor.id.to_string()),
                name: ActiveValue::Set(flavor.name.to_string()),
                vcpus: ActiveValue::Set(flavor.vcpus),
                ram_mb: ActiveValue::Set(flavor.ram_mb),
                disk_gb: ActiveValue::Set(flavor.disk_gb),
            }
            .insert(self.db)
            .await?;
            report.flavors_inserted += 1;
        }

        for image in &SEED_IMAGES {
            let exists = entity::prelude::Image::find_by_id(image.id)
                .one(self.db)
                .await?
                .is_some();
            if exists {
                continue;
            }

            entity::image::ActiveModel {
                id: ActiveValue::Set(image.id.to_string()),
                name: ActiveValue::Set(image.name.to_string()),
                os_distro: ActiveValue::Set(image.os_distro.to_string()),
                min_disk_gb: ActiveValue::Set(image.min_disk_gb),
                size_bytes: ActiveValue::Set(image.size_bytes),
                status: ActiveValue::Set(SEED_IMAGE_STATUS.to_string()),
            }
            .insert(self.db)
            .await?;
            report.images_inserted += 1;
        }

        Ok(report)
    }
}
