use crate::server::data::catalog::{CatalogRepository, SEED_FLAVORS, SEED_IMAGES};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod seed;
