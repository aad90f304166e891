use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        image::{ImageDto, PaginatedImagesDto},
    },
    server::{
        data::unit_of_work::UnitOfWork, error::AppError,
        middleware::request_context::RequestContext, model::pagination::Pagination,
        service::image::ImageService, state::AppState,
    },
};

/// Tag for grouping image endpoints in OpenAPI documentation
pub static IMAGE_TAG: &str = "images";

/// List images.
///
/// Returns catalog images ordered by name together with the total count.
///
/// # Returns
/// - `200 OK` - Page of images
/// - `422 Unprocessable Entity` - `limit` outside 1-100 or negative `offset`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/images",
    tag = IMAGE_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Successfully retrieved images", body = PaginatedImagesDto),
        (status = 422, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_images(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.limit, query.offset)?;

    let uow = UnitOfWork::begin(&state.db).await?;
    let page = {
        let infra = state.infra.connect(uow.connection());
        ImageService::new(infra.as_ref(), &ctx)
            .get_paginated(pagination)
            .await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a image by ID.
///
/// # Returns
/// - `200 OK` - The image
/// - `404 Not Found` - Image does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/images/{id}",
    tag = IMAGE_TAG,
    params(
        ("id" = String, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved image", body = ImageDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_image(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    let image = {
        let infra = state.infra.connect(uow.connection());
        ImageService::new(infra.as_ref(), &ctx).get(&id).await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(image.into_dto())))
}
