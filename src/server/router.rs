//! Route table, middleware stack and API documentation.

use axum::{body::Body, http::Request, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{flavor, health, image, server},
    middleware::request_context::REQUEST_ID_HEADER,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Server Lifecycle API",
        description = "Lifecycle management for virtual servers backed by a pluggable infrastructure backend"
    ),
    tags(
        (name = "servers", description = "Server lifecycle operations"),
        (name = "flavors", description = "Hardware profile catalog"),
        (name = "images", description = "Operating system image catalog"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds the route table together with its OpenAPI document.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(server::create_server, server::list_servers))
        .routes(routes!(
            server::get_server,
            server::update_server,
            server::delete_server
        ))
        .routes(routes!(server::perform_server_action))
        .routes(routes!(flavor::list_flavors))
        .routes(routes!(flavor::get_flavor))
        .routes(routes!(image::list_images))
        .routes(routes!(image::get_image))
        .routes(routes!(health::health))
        .split_for_parts()
}

/// Builds the complete application.
///
/// The OpenAPI title is the configured application name. Layers, outermost first: assign or reuse `X-Request-ID`, open the request span,
/// copy the ID onto the response.
pub fn router(state: AppState) -> Router {
    let (api, mut openapi) = api_router();
    openapi.info.title = state.app_name.clone();

    api.merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
