use crate::server::{data::image::ImageRepository, model::pagination::Pagination};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
