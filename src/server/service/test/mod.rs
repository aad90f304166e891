use crate::server::{
    data::catalog::CatalogRepository,
    error::{lifecycle::LifecycleError, AppError},
    infra::InfraBackend,
    middleware::request_context::RequestContext,
    model::pagination::Pagination,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod server;

/// Context shared by service tests; the ID only appears in log output.
fn ctx() -> RequestContext {
    RequestContext::new("test-request")
}
