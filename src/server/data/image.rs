use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::server::model::{image::Image, pagination::Pagination};

pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Image>, DbErr> {
        entity::prelude::Image::find_by_id(id)
            .one(self.db)
            .await?
            .map(Image::from_entity)
            .transpose()
    }

    /// Gets a page of images ordered by name, together with the total count
    pub async fn get_paginated(&self, pagination: Pagination) -> Result<(Vec<Image>, u64), DbErr> {
        let total = entity::prelude::Image::find().count(self.db).await?;

        let images = entity::prelude::Image::find()
            .order_by_asc(entity::image::Column::Name)
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Image::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((images, total))
    }
}
