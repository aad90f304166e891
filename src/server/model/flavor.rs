use sea_orm::DbErr;

use crate::{
    model::flavor::{FlavorDto, PaginatedFlavorsDto},
    server::model::pagination::Page,
};

/// Hardware profile a server runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    pub id: String,
    pub name: String,
    pub vcpus: i32,
    pub ram_mb: i32,
    pub disk_gb: i32,
}

impl Flavor {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Catalog rows carry no derived fields so this never fails; it returns `Result`
    /// to keep the same shape as the other `from_entity` conversions.
    pub fn from_entity(entity: entity::flavor::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            vcpus: entity.vcpus,
            ram_mb: entity.ram_mb,
            disk_gb: entity.disk_gb,
        })
    }

    pub fn into_dto(self) -> FlavorDto {
        FlavorDto {
            id: self.id,
            name: self.name,
            vcpus: self.vcpus,
            ram_mb: self.ram_mb,
            disk_gb: self.disk_gb,
        }
    }
}

impl Page<Flavor> {
    pub fn into_dto(self) -> PaginatedFlavorsDto {
        let next_offset = self.next_offset();

        PaginatedFlavorsDto {
            items: self.items.into_iter().map(Flavor::into_dto).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            next_offset,
        }
    }
}
