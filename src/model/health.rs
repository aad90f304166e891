use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthDto {
    /// `healthy` or `unhealthy`
    pub status: String,
    pub version: String,
    pub env: String,
    pub uptime_s: u64,
    pub checks: HealthChecksDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthChecksDto {
    pub database: HealthCheckDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthCheckDto {
    pub status: String,
}
