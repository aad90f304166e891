use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::{HealthCheckDto, HealthChecksDto, HealthDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness and readiness probe.
///
/// Issues a trivial read against the store through the configured backend. Never
/// fails with the error envelope: an unreachable store is reported in the body
/// together with a 503 status.
///
/// # Returns
/// - `200 OK` - Store reachable
/// - `503 Service Unavailable` - Store read failed
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Service unhealthy", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let probe = state.infra.connect(&state.db).probe().await;

    let (status, database) = match probe {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(err) => {
            tracing::error!("Health probe failed: {}", err);
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
    };

    let body = HealthDto {
        status: if status.is_success() {
            "healthy"
        } else {
            "unhealthy"
        }
        .to_string(),
        version: state.app_version.clone(),
        env: state.app_env.clone(),
        uptime_s: state.started_at.elapsed().as_secs(),
        checks: HealthChecksDto {
            database: HealthCheckDto {
                status: database.to_string(),
            },
        },
    };

    (status, Json(body))
}
