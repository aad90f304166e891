use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::server::model::{flavor::Flavor, pagination::Pagination};

pub struct FlavorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlavorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Flavor>, DbErr> {
        entity::prelude::Flavor::find_by_id(id)
            .one(self.db)
            .await?
            .map(Flavor::from_entity)
            .transpose()
    }

    /// Gets a page of flavors ordered by name, together with the total count
    pub async fn get_paginated(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<Flavor>, u64), DbErr> {
        let total = entity::prelude::Flavor::find().count(self.db).await?;

        let flavors = entity::prelude::Flavor::find()
            .order_by_asc(entity::flavor::Column::Name)
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Flavor::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((flavors, total))
    }
}
