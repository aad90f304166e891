use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateServerDto {
    pub name: String,
    pub flavor_id: String,
    pub image_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateServerDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerActionDto {
    /// One of `start`, `stop`, `reboot`, `resize`, `confirm_resize`
    pub action: String,
    /// Target flavor, required for `resize` and rejected otherwise
    #[serde(default)]
    pub flavor_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerDto {
    pub id: String,
    pub name: String,
    pub status: String,
    pub flavor_id: String,
    pub image_id: String,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedServersDto {
    pub items: Vec<ServerDto>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub next_offset: Option<u64>,
}
