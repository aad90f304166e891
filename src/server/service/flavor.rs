use crate::server::{
    error::{lifecycle::LifecycleError, AppError},
    infra::Infrastructure,
    middleware::request_context::RequestContext,
    model::{
        flavor::Flavor,
        pagination::{Page, Pagination},
    },
};

pub struct FlavorService<'a> {
    infra: &'a dyn Infrastructure,
    ctx: &'a RequestContext,
}

impl<'a> FlavorService<'a> {
    pub fn new(infra: &'a dyn Infrastructure, ctx: &'a RequestContext) -> Self {
        Self { infra, ctx }
    }

    pub async fn get(&self, id: &str) -> Result<Flavor, AppError> {
        tracing::debug!(request_id = %self.ctx.request_id, flavor_id = %id, "Fetching flavor");

        self.infra
            .get_flavor(id)
            .await?
            .ok_or_else(|| LifecycleError::FlavorNotFound(id.to_string()).into())
    }

    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Page<Flavor>, AppError> {
        tracing::debug!(
            request_id = %self.ctx.request_id,
            limit = pagination.limit,
            offset = pagination.offset,
            "Listing flavors"
        );

        let (flavors, total) = self.infra.list_flavors(pagination).await?;

        Ok(Page::new(flavors, total, pagination))
    }
}
