use crate::{
    model::api::ErrorDto,
    server::{
        data::catalog::CatalogRepository, infra::InfraBackend, router::router, state::AppState,
    },
};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;


const SMALL: &str = "11111111-0000-0000-0000-000000000002";
const LARGE: &str = "11111111-0000-0000-0000-000000000004";
const UBUNTU: &str = "22222222-0000-0000-0000-000000000001";
const APP_NAME: &str = "Lifecycle Test API";

/// Builds the application over a fresh in-memory database with the catalog seeded.
///
/// The returned context owns the database and must outlive the router.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    CatalogRepository::new(&db).seed().await.unwrap();

    let state = AppState::new(
        db,
        InfraBackend::Simulated,
        APP_NAME.to_string(),
        "0.1.0".to_string(),
        "test".to_string(),
    );

    (test, router(state))
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl TestResponse {
    fn error(&self) -> ErrorDto {
        serde_json::from_value(self.body.clone()).unwrap()
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(app, request).await
}

async fn delete(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

async fn create_server(app: &Router, name: &str) -> Value {
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/servers",
        json!({ "name": name, "flavor_id": SMALL, "image_id": UBUNTU }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    response.body
}
