use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ImageDto {
    pub id: String,
    pub name: String,
    pub os_distro: String,
    pub min_disk_gb: i32,
    pub size_bytes: i64,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedImagesDto {
    pub items: Vec<ImageDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub next_offset: Option<u64>,
}
