use sea_orm::DbErr;

use crate::{
    model::image::{ImageDto, PaginatedImagesDto},
    server::model::pagination::Page,
};

/// Operating system image a server boots from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    pub name: String,
    pub os_distro: String,
    pub min_disk_gb: i32,
    pub size_bytes: i64,
    pub status: String,
}

impl Image {
    pub fn from_entity(entity: entity::image::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            os_distro: entity.os_distro,
            min_disk_gb: entity.min_disk_gb,
            size_bytes: entity.size_bytes,
            status: entity.status,
        })
    }

    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            name: self.name,
            os_distro: self.os_distro,
            min_disk_gb: self.min_disk_gb,
            size_bytes: self.size_bytes,
            status: self.status,
        }
    }
}

impl Page<Image> {
    pub fn into_dto(self) -> PaginatedImagesDto {
        let next_offset = self.next_offset();

        PaginatedImagesDto {
            items: self.items.into_iter().map(Image::into_dto).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            next_offset,
        }
    }
}
