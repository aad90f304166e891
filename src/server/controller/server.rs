use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        server::{
            CreateServerDto, PaginatedServersDto, ServerActionDto, ServerDto, UpdateServerDto,
        },
    },
    server::{
        data::unit_of_work::UnitOfWork,
        error::AppError,
        middleware::request_context::RequestContext,
        model::{
            pagination::Pagination,
            server::{CreateServerParams, ServerActionParams, UpdateServerParams},
        },
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "servers";

/// Create a new server.
///
/// Validates the referenced flavor and image, then provisions a server in the
/// `ACTIVE` status with a generated ID and an assigned IP address.
///
/// # Returns
/// - `201 Created` - The created server
/// - `404 Not Found` - Flavor or image does not exist
/// - `422 Unprocessable Entity` - Invalid request body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 201, description = "Successfully created server", body = ServerDto),
        (status = 404, description = "Flavor or image not found", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateServerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateServerParams::from_dto(payload)?;

    let uow = UnitOfWork::begin(&state.db).await?;
    let server = {
        let infra = state.infra.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx).create(params).await?
    };
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// List servers.
///
/// Returns servers ordered by creation time (ties broken by ID) together with the
/// total count.
///
/// # Returns
/// - `200 OK` - Page of servers
/// - `422 Unprocessable Entity` - `limit` outside 1-100 or negative `offset`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/servers",
    tag = SERVER_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Successfully retrieved servers", body = PaginatedServersDto),
        (status = 422, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.limit, query.offset)?;

    let uow = UnitOfWork::begin(&state.db).await?;
    let page = {
        let infra = state.infra.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx)
            .get_paginated(pagination)
            .await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a server by ID.
///
/// # Returns
/// - `200 OK` - The server
/// - `404 Not Found` - Server does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = String, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved server", body = ServerDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    let server = {
        let infra = state.infra.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx).get(&id).await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Update server metadata.
///
/// Applies the fields present in the body and always bumps `updated_at`.
///
/// # Returns
/// - `200 OK` - The updated server
/// - `404 Not Found` - Server does not exist
/// - `422 Unprocessable Entity` - Invalid request body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = String, Path, description = "Server ID")
    ),
    request_body = UpdateServerDto,
    responses(
        (status = 200, description = "Successfully updated server", body = ServerDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_server(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<UpdateServerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = UpdateServerParams::from_dto(payload)?;

    let uow = UnitOfWork::begin(&state.db).await?;
    let server = {
        let infra = state.infra.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx)
            .update(&id, params)
            .await?
    };
    uow.commit().await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Delete a server.
///
/// Removes the server regardless of its status.
///
/// # Returns
/// - `204 No Content` - Server deleted
/// - `404 Not Found` - Server does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = String, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted server"),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uow = UnitOfWork::begin(&state.db).await?;
    {
        let infra = state.infra.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx).delete(&id).await?;
    }
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Perform a lifecycle action on a server.
///
/// Supported actions are `start`, `stop`, `reboot`, `resize` (with `flavor_id`) and
/// `confirm_resize`. The action must be permitted from the server's current status.
///
/// # Returns
/// - `202 Accepted` - The server after the action
/// - `404 Not Found` - Server or resize target flavor does not exist
/// - `409 Conflict` - Action not permitted from the current status
/// - `422 Unprocessable Entity` - Unknown action or misplaced `flavor_id`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/servers/{id}/action",
    tag = SERVER_TAG,
    params(
        ("id" = String, Path, description = "Server ID")
    ),
    request_body = ServerActionDto,
    responses(
        (status = 202, description = "Action applied", body = ServerDto),
        (status = 404, description = "Server or flavor not found", body = ErrorDto),
        (status = 409, description = "Invalid state transition", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn perform_server_action(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<ServerActionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = ServerActionParams::from_dto(payload)?;

    let uow = UnitOfWork::begin(&state.db).await?;
    let server = {
        let infra = state.infra.connect(uow.connection());
        ServerService::new(infra.as_ref(), &ctx)
            .perform_action(&id, params)
            .await?
    };
    uow.commit().await?;

    Ok((StatusCode::ACCEPTED, Json(server.into_dto())))
}
