use crate::server::{
    error::{lifecycle::LifecycleError, AppError},
    infra::Infrastructure,
    middleware::request_context::RequestContext,
    model::{
        image::Image,
        pagination::{Page, Pagination},
    },
};

pub struct ImageService<'a> {
    infra: &'a dyn Infrastructure,
    ctx: &'a RequestContext,
}

impl<'a> ImageService<'a> {
    pub fn new(infra: &'a dyn Infrastructure, ctx: &'a RequestContext) -> Self {
        Self { infra, ctx }
    }

    pub async fn get(&self, id: &str) -> Result<Image, AppError> {
        tracing::debug!(request_id = %self.ctx.request_id, image_id = %id, "Fetching image");

        self.infra
            .get_image(id)
            .await?
            .ok_or_else(|| LifecycleError::ImageNotFound(id.to_string()).into())
    }

    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Page<Image>, AppError> {
        tracing::debug!(
            request_id = %self.ctx.request_id,
            limit = pagination.limit,
            offset = pagination.offset,
            "Listing images"
        );

        let (images, total) = self.infra.list_images(pagination).await?;

        Ok(Page::new(images, total, pagination))
    }
}
