use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        flavor::{FlavorDto, PaginatedFlavorsDto},
    },
    server::{
        data::unit_of_work::UnitOfWork, error::AppError,
        middleware::request_context::RequestContext, model::pagination::Pagination,
        service::flavor::FlavorService, state::AppState,
    },
};

/// Tag for grouping flavor endpoints in OpenAPI documentation
pub static FLAVOR_TAG: &str = "flavors";

/// List flavors.
///
/// Returns catalog flavors ordered by name together with the total count.
///
/// # Returns
/// - `200 OK` - Page of flavors
/// - `422 Unprocessable Entity` - `limit` outside 1-100 or negative `offset`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/flavors",
    tag = FLAVOR_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Successfully retrieved flavors", body = PaginatedFlavorsDto),
        (status = 422, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flavors(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.limit, query.offset)?;

    let uow = UnitOfWork::begin(&state.db).await?;
    let page = {
        let infra = state.infra.connect(uow.connection());
        FlavorService::new(infra.as_ref(), &ctx)
            .get_paginated(pagination)
            .await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a flavor by ID.
///
/// # Returns
/// - `200 OK` - The flavor
/// - `404 Not Found` - Flavor does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/flavors/{id}",
    tag = FLAVOR_TAG,
    params(
        ("id" = String, Path, description = "Flavor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flavor", body = FlavorDto),
        (status = 404, description = "Flavor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flavor(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    let flavor = {
        let infra = state.infra.connect(uow.connection());
        FlavorService::new(infra.as_ref(), &ctx).get(&id).await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(flavor.into_dto())))
}
